use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::models::{
    business::{Business, BusinessStatus, NewBusiness, Plan, Theme},
    professional::{NewProfessional, Professional, Service},
};

fn service(id: &str, name: &str, duration_min: u32, price: f64) -> Service {
    Service { id: id.to_string(), name: name.to_string(), duration_min, price }
}

fn slots(times: &[&str]) -> Vec<String> {
    times.iter().map(|t| t.to_string()).collect()
}

fn created_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// The two demo tenants, without ids. Used by the seed binary.
pub fn sample_new_businesses() -> Vec<NewBusiness> {
    vec![
        NewBusiness {
            name: "Barbería El Clásico".to_string(),
            slug: "barberia-el-clasico".to_string(),
            owner_email: "carlos@barberia.com".to_string(),
            status: BusinessStatus::Active,
            plan: Plan::Premium,
            description: "La mejor barbería tradicional de la ciudad".to_string(),
            address: "Av. Principal 123, Centro".to_string(),
            phone: "+1234567890".to_string(),
            theme: Theme { primary: "#1f2937".to_string(), secondary: "#3b82f6".to_string() },
        },
        NewBusiness {
            name: "Salón Elegance".to_string(),
            slug: "salon-elegance".to_string(),
            owner_email: "ana@salon.com".to_string(),
            status: BusinessStatus::Active,
            plan: Plan::Basic,
            description: "Estilismo y colorimetría profesional".to_string(),
            address: "Calle Bella 456, Zona Norte".to_string(),
            phone: "+1234567891".to_string(),
            theme: Theme { primary: "#ec4899".to_string(), secondary: "#8b5cf6".to_string() },
        },
    ]
}

/// Demo staff, one per sample business, in the same order as [`sample_new_businesses`].
pub fn sample_new_professionals(business_ids: &[String]) -> Vec<NewProfessional> {
    let owner = |i: usize| business_ids.get(i).cloned().unwrap_or_default();
    vec![
        NewProfessional {
            business_id: owner(0),
            name: "Carlos Mendoza".to_string(),
            email: "carlos@barberia.com".to_string(),
            specialty: "Barbero Clásico".to_string(),
            photo_url: "/placeholder.svg?height=200&width=200".to_string(),
            available_slots: slots(&["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"]),
            services: vec![
                service("1", "Corte Clásico", 45, 25.0),
                service("2", "Barba", 30, 15.0),
                service("3", "Corte + Barba", 60, 35.0),
            ],
            location: "Centro".to_string(),
        },
        NewProfessional {
            business_id: owner(1),
            name: "Ana García".to_string(),
            email: "ana@salon.com".to_string(),
            specialty: "Estilista & Colorista".to_string(),
            photo_url: "/placeholder.svg?height=200&width=200".to_string(),
            available_slots: slots(&["10:00", "11:30", "13:00", "15:30", "17:00"]),
            services: vec![
                service("4", "Corte Mujer", 60, 40.0),
                service("5", "Tinte", 120, 80.0),
                service("6", "Mechas", 180, 120.0),
            ],
            location: "Zona Norte".to_string(),
        },
    ]
}

/// Fallback served by the gateway when the business collection cannot be read.
pub fn fallback_businesses() -> Vec<Business> {
    let created = [created_on(2024, 1, 15), created_on(2024, 2, 1)];
    sample_new_businesses()
        .into_iter()
        .zip(created)
        .enumerate()
        .map(|(i, (fields, at))| Business::from_new((i + 1).to_string(), fields, at))
        .collect()
}

/// Fallback served by the gateway when the professional collection cannot be read.
pub fn fallback_professionals() -> Vec<Professional> {
    let ids = vec!["1".to_string(), "2".to_string()];
    sample_new_professionals(&ids)
        .into_iter()
        .enumerate()
        .map(|(i, fields)| Professional::from_new((i + 1).to_string(), fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::slug::slugify;

    #[test]
    fn test_fallback_professionals_reference_fallback_businesses() {
        let businesses = fallback_businesses();
        for p in fallback_professionals() {
            assert!(businesses.iter().any(|b| b.id == p.business_id), "dangling business id {}", p.business_id);
        }
    }

    #[test]
    fn test_sample_slugs_match_names() {
        for b in sample_new_businesses() {
            assert_eq!(slugify(&b.name), b.slug);
        }
    }
}
