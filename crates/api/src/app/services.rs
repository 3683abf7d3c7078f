use ordergate_store::{InMemoryOrderStore, InMemoryProfileStore, demo};

/// Resource stores shared by all handlers.
#[derive(Debug)]
pub struct AppServices {
    pub orders: InMemoryOrderStore,
    pub profiles: InMemoryProfileStore,
}

/// Wire up the in-memory stores, optionally seeded with the demo data set.
pub fn build_services(seed_demo_data: bool) -> AppServices {
    if seed_demo_data {
        AppServices {
            orders: InMemoryOrderStore::seeded(demo::demo_orders()),
            profiles: InMemoryProfileStore::seeded(demo::demo_profiles()),
        }
    } else {
        AppServices {
            orders: InMemoryOrderStore::new(),
            profiles: InMemoryProfileStore::new(),
        }
    }
}
