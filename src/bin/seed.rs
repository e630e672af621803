//! Loads the demo businesses and their staff into the configured database.
//! Businesses whose slug already exists are left untouched.

use agendly_backend::config::Config;
use agendly_backend::domain::services::sample_data::{sample_new_businesses, sample_new_professionals};
use agendly_backend::infra::factory::connect_repositories;
use agendly_backend::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _guard = init_logging();

    let config = Config::from_env();
    let gateway = connect_repositories(&config).await.gateway();

    let mut business_ids = Vec::new();
    let mut created_any = false;
    for fields in sample_new_businesses() {
        if let Some(existing) = gateway.business_by_slug(&fields.slug).await {
            info!("Skipping '{}', already present as {}", existing.slug, existing.id);
            business_ids.push(existing.id);
            continue;
        }

        match gateway.create_business(fields).await {
            Ok(business) => {
                info!("Created business '{}' ({})", business.slug, business.id);
                business_ids.push(business.id);
                created_any = true;
            }
            Err(e) => {
                error!("Seeding aborted: {}", e);
                return;
            }
        }
    }

    if !created_any {
        info!("Nothing to seed");
        return;
    }

    for fields in sample_new_professionals(&business_ids) {
        match gateway.create_professional(fields).await {
            Ok(professional) => info!("Created professional '{}' ({})", professional.name, professional.id),
            Err(e) => error!("Failed to create professional: {}", e),
        }
    }

    info!("Seeding finished");
}
