//! Demo data set served by the sample deployment and reused by tests:
//! five orders split across two owners, plus a profile per known user.

use chrono::{DateTime, TimeZone, Utc};

use ordergate_core::{OrderId, UserId};

use crate::{OrderRecord, OrderStatus, ProfileRecord};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn demo_orders() -> Vec<OrderRecord> {
    vec![
        OrderRecord {
            order_id: OrderId::new(1001),
            user_id: UserId::new("user_a"),
            product_name: "Widget A".to_string(),
            price: 99.99,
            status: OrderStatus::Shipped,
            created_at: ts(2024, 1, 15, 10, 30),
        },
        OrderRecord {
            order_id: OrderId::new(1002),
            user_id: UserId::new("user_a"),
            product_name: "Widget B".to_string(),
            price: 149.99,
            status: OrderStatus::Pending,
            created_at: ts(2024, 1, 16, 14, 20),
        },
        OrderRecord {
            order_id: OrderId::new(1003),
            user_id: UserId::new("user_a"),
            product_name: "Widget C".to_string(),
            price: 199.99,
            status: OrderStatus::Delivered,
            created_at: ts(2024, 1, 17, 9, 15),
        },
        OrderRecord {
            order_id: OrderId::new(2001),
            user_id: UserId::new("user_b"),
            product_name: "Gadget X".to_string(),
            price: 299.99,
            status: OrderStatus::Pending,
            created_at: ts(2024, 1, 18, 11, 45),
        },
        OrderRecord {
            order_id: OrderId::new(2002),
            user_id: UserId::new("user_b"),
            product_name: "Gadget Y".to_string(),
            price: 399.99,
            status: OrderStatus::Shipped,
            created_at: ts(2024, 1, 19, 16, 0),
        },
    ]
}

pub fn demo_profiles() -> Vec<ProfileRecord> {
    vec![
        ProfileRecord {
            user_id: UserId::new("user_a"),
            email: "user_a@example.com".to_string(),
            full_name: "Alice Anderson".to_string(),
            phone: Some("+1-555-0101".to_string()),
            address: Some("123 Main St, Anytown, USA".to_string()),
        },
        ProfileRecord {
            user_id: UserId::new("user_b"),
            email: "user_b@example.com".to_string(),
            full_name: "Bob Brown".to_string(),
            phone: Some("+1-555-0102".to_string()),
            address: Some("456 Oak Ave, Somewhere, USA".to_string()),
        },
        ProfileRecord {
            user_id: UserId::new("admin"),
            email: "admin@example.com".to_string(),
            full_name: "Admin User".to_string(),
            phone: Some("+1-555-0100".to_string()),
            address: Some("789 Admin Blvd, HQ, USA".to_string()),
        },
    ]
}
