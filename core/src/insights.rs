//! Seller insights computed from fetched properties.
//!
//! Feeds the three dashboard charts: type distribution (pie), average price
//! per type (bar) and price trend (line).

use crate::models::{Property, PropertyType};

/// Number of listings of one type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCount {
    pub property_type: PropertyType,
    pub count: usize,
}

/// Mean asking price of one type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypePrice {
    pub property_type: PropertyType,
    pub average_price: f64,
}

/// One point on the price trend line.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub price: f64,
}

/// Aggregates behind the insights tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Insights {
    /// Every known type (zero counts included), then unknown types as seen.
    pub distribution: Vec<TypeCount>,
    /// Only types with at least one listing.
    pub avg_price_by_type: Vec<TypePrice>,
    /// One point per listing, in service order.
    pub trend: Vec<TrendPoint>,
}

impl Insights {
    pub fn total(&self) -> usize {
        self.distribution.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }
}

/// Aggregate a property list into chart series.
pub fn compute_insights(properties: &[Property]) -> Insights {
    let mut order: Vec<PropertyType> = PropertyType::ALL.to_vec();
    for property in properties {
        if !order.contains(&property.property_type) {
            order.push(property.property_type.clone());
        }
    }

    let mut distribution = Vec::with_capacity(order.len());
    let mut avg_price_by_type = Vec::new();

    for property_type in order {
        let prices: Vec<f64> = properties
            .iter()
            .filter(|p| p.property_type == property_type)
            .map(|p| p.price)
            .collect();

        if !prices.is_empty() {
            avg_price_by_type.push(TypePrice {
                property_type: property_type.clone(),
                average_price: prices.iter().sum::<f64>() / prices.len() as f64,
            });
        }
        distribution.push(TypeCount {
            property_type,
            count: prices.len(),
        });
    }

    let trend = properties
        .iter()
        .map(|p| TrendPoint {
            label: format!("#{}", p.id),
            price: p.price,
        })
        .collect();

    Insights {
        distribution,
        avg_price_by_type,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyId;

    fn listing(id: &str, property_type: PropertyType, price: f64) -> Property {
        Property {
            id: PropertyId::new(id),
            property_type,
            location: String::new(),
            size: None,
            price,
            sale: true,
            rent: false,
            details: None,
            agent_name: String::new(),
            agent_contact: String::new(),
            bhk: None,
            features: None,
        }
    }

    #[test]
    fn test_empty_input() {
        let insights = compute_insights(&[]);
        assert_eq!(insights.distribution.len(), 5);
        assert!(insights.distribution.iter().all(|d| d.count == 0));
        assert!(insights.avg_price_by_type.is_empty());
        assert!(insights.is_empty());
        assert_eq!(insights.total(), 0);
    }

    #[test]
    fn test_distribution_and_average() {
        let properties = vec![
            listing("1", PropertyType::Villa, 1_000_000.0),
            listing("2", PropertyType::Villa, 1_400_000.0),
            listing("3", PropertyType::Plot, 500_000.0),
        ];
        let insights = compute_insights(&properties);

        assert_eq!(insights.distribution[0].property_type, PropertyType::Villa);
        assert_eq!(insights.distribution[0].count, 2);
        assert_eq!(insights.distribution[2].count, 1);
        assert_eq!(insights.total(), 3);

        assert_eq!(insights.avg_price_by_type.len(), 2);
        assert_eq!(insights.avg_price_by_type[0].average_price, 1_200_000.0);
        assert_eq!(insights.avg_price_by_type[1].property_type, PropertyType::Plot);
    }

    #[test]
    fn test_unknown_types_appended() {
        let farm = PropertyType::Other("Farmhouse".to_string());
        let properties = vec![
            listing("1", farm.clone(), 300.0),
            listing("2", PropertyType::House, 100.0),
        ];
        let insights = compute_insights(&properties);

        assert_eq!(insights.distribution.len(), 6);
        assert_eq!(insights.distribution[5].property_type, farm);
        assert_eq!(insights.avg_price_by_type.last().unwrap().property_type, farm);
    }

    #[test]
    fn test_trend_follows_service_order() {
        let properties = vec![
            listing("9", PropertyType::House, 900.0),
            listing("3", PropertyType::Rental, 30.0),
        ];
        let trend = compute_insights(&properties).trend;
        assert_eq!(
            trend,
            vec![
                TrendPoint { label: "#9".into(), price: 900.0 },
                TrendPoint { label: "#3".into(), price: 30.0 },
            ]
        );
    }
}
