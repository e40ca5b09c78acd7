//! Seed the database with demo vendors and menus.
//!
//! Gives local development something to browse: a couple of vendors in
//! one pincode with service switched on and a handful of menu items each.
//! Safe to re-run; it skips vendors whose email already exists.

use rust_decimal::Decimal;
use secrecy::SecretString;

use hotplate_core::{Email, Phone, Price};
use hotplate_server::db::foods::NewFood;
use hotplate_server::db::vendors::NewVendor;
use hotplate_server::db::{self, FoodRepository, RepositoryError, VendorRepository};
use hotplate_server::services::auth::hash_password;

/// Demo password shared by all seeded vendors.
const DEMO_PASSWORD: &str = "hotplate-dev";

/// Pincode all demo vendors serve.
const DEMO_PINCODE: &str = "94103";

struct DemoVendor {
    name: &'static str,
    owner: &'static str,
    email: &'static str,
    phone: &'static str,
    food_types: &'static [&'static str],
    menu: &'static [DemoFood],
}

struct DemoFood {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    food_type: &'static str,
    ready_time: i32,
    // price in cents to stay away from float literals
    price_cents: i64,
}

const DEMO_VENDORS: &[DemoVendor] = &[
    DemoVendor {
        name: "Taco Cart",
        owner: "Dana",
        email: "tacos@hotplate.test",
        phone: "+1 555 867 5309",
        food_types: &["mexican", "street"],
        menu: &[
            DemoFood {
                name: "Al Pastor Taco",
                description: "Spit-roasted pork, pineapple, cilantro",
                category: "taco",
                food_type: "non-veg",
                ready_time: 10,
                price_cents: 450,
            },
            DemoFood {
                name: "Mushroom Taco",
                description: "Roasted oyster mushrooms, salsa verde",
                category: "taco",
                food_type: "veg",
                ready_time: 10,
                price_cents: 400,
            },
            DemoFood {
                name: "Horchata",
                description: "House-made, over ice",
                category: "drink",
                food_type: "veg",
                ready_time: 2,
                price_cents: 300,
            },
        ],
    },
    DemoVendor {
        name: "Noodle House",
        owner: "Minh",
        email: "noodles@hotplate.test",
        phone: "+1 555 201 4455",
        food_types: &["vietnamese", "soup"],
        menu: &[
            DemoFood {
                name: "Pho Bo",
                description: "Beef noodle soup, rare steak, brisket",
                category: "soup",
                food_type: "non-veg",
                ready_time: 20,
                price_cents: 1450,
            },
            DemoFood {
                name: "Bun Cha Gio Chay",
                description: "Vermicelli bowl, fried tofu rolls",
                category: "noodles",
                food_type: "veg",
                ready_time: 15,
                price_cents: 1250,
            },
            DemoFood {
                name: "Banh Mi",
                description: "Grilled pork, pickled daikon, pate",
                category: "sandwich",
                food_type: "non-veg",
                ready_time: 45,
                price_cents: 950,
            },
        ],
    },
];

/// Seed demo vendors and menus.
///
/// # Errors
///
/// Returns an error if the environment is incomplete or a database
/// operation fails.
pub async fn demo_data() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    tracing::info!("Connected to database");

    let vendors = VendorRepository::new(&pool);
    let foods = FoodRepository::new(&pool);

    let password_hash = hash_password(DEMO_PASSWORD).map_err(|e| e.to_string())?;

    let mut created = 0usize;
    let mut skipped = 0usize;

    for demo in DEMO_VENDORS {
        let vendor = match vendors
            .create(&NewVendor {
                name: demo.name.to_owned(),
                owner_name: demo.owner.to_owned(),
                email: Email::parse(demo.email)?,
                phone: Phone::parse(demo.phone)?,
                password_hash: password_hash.clone(),
                address: "Demo Street 1".to_owned(),
                pincode: DEMO_PINCODE.to_owned(),
                food_types: demo.food_types.iter().map(|&t| t.to_owned()).collect(),
            })
            .await
        {
            Ok(vendor) => vendor,
            Err(RepositoryError::Conflict(_)) => {
                tracing::info!("Vendor {} already exists, skipping", demo.email);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e.to_string().into()),
        };

        // Seeded vendors should be browsable immediately
        vendors
            .set_service_available(vendor.id, true)
            .await
            .map_err(|e| e.to_string())?;

        for item in demo.menu {
            foods
                .create(&NewFood {
                    vendor_id: vendor.id,
                    name: item.name.to_owned(),
                    description: item.description.to_owned(),
                    category: item.category.to_owned(),
                    food_type: item.food_type.to_owned(),
                    ready_time: item.ready_time,
                    price: Price::new(Decimal::new(item.price_cents, 2)),
                })
                .await
                .map_err(|e| e.to_string())?;
        }

        tracing::info!(
            "Seeded vendor {} with {} menu items",
            demo.name,
            demo.menu.len()
        );
        created += 1;
    }

    tracing::info!("Seeding complete! Created: {created}, skipped: {skipped}");
    tracing::info!("Demo vendor password: {DEMO_PASSWORD}");
    tracing::info!("Browse with: GET /shopping/availability/{DEMO_PINCODE}");

    Ok(())
}
