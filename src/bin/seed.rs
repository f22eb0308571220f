//! One-shot database seeder for local development and demos. Wipes both
//! tables and repopulates them with fixture data, so it can be re-run at
//! any time.
//!
//! Run with: cargo run --bin seed

use sqlx::{postgres::PgPoolOptions, Row};
use time::macros::datetime;
use time::OffsetDateTime;

use farminvest::auth::password::hash_password;
use farminvest::config::database_url_from_env;
use farminvest::investments::repo::Investment;

struct SeedUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
}

struct SeedInvestment {
    farmer_name: &'static str,
    amount: f64,
    crop: &'static str,
    created_at: OffsetDateTime,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        name: "Demo User",
        email: "demo@farminvest.com",
        password: "password123",
    },
    SeedUser {
        name: "John Admin",
        email: "admin@farminvest.com",
        password: "password123",
    },
];

const INVESTMENTS: &[SeedInvestment] = &[
    SeedInvestment { farmer_name: "John Doe", amount: 5000.00, crop: "Wheat", created_at: datetime!(2025-12-01 10:00:00 UTC) },
    SeedInvestment { farmer_name: "Jane Smith", amount: 7500.50, crop: "Rice", created_at: datetime!(2025-12-05 14:30:00 UTC) },
    SeedInvestment { farmer_name: "Robert Johnson", amount: 3200.00, crop: "Corn", created_at: datetime!(2025-12-10 09:15:00 UTC) },
    SeedInvestment { farmer_name: "Emily Davis", amount: 10000.00, crop: "Soybeans", created_at: datetime!(2025-12-15 16:45:00 UTC) },
    SeedInvestment { farmer_name: "Michael Brown", amount: 4500.75, crop: "Cotton", created_at: datetime!(2025-12-18 11:20:00 UTC) },
    SeedInvestment { farmer_name: "Sarah Wilson", amount: 6800.00, crop: "Sugarcane", created_at: datetime!(2025-12-20 08:00:00 UTC) },
    SeedInvestment { farmer_name: "David Lee", amount: 2500.00, crop: "Potatoes", created_at: datetime!(2025-12-22 13:10:00 UTC) },
    SeedInvestment { farmer_name: "Lisa Anderson", amount: 8900.25, crop: "Tomatoes", created_at: datetime!(2025-12-25 15:55:00 UTC) },
    SeedInvestment { farmer_name: "James Taylor", amount: 5500.00, crop: "Onions", created_at: datetime!(2025-12-28 10:30:00 UTC) },
    SeedInvestment { farmer_name: "Jennifer Martinez", amount: 12000.00, crop: "Grapes", created_at: datetime!(2025-12-30 17:00:00 UTC) },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "farminvest=info".to_string()),
        )
        .init();

    let db = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url_from_env())
        .await?;
    println!("Connected to database");

    // Investments first; users may grow a foreign key later.
    sqlx::query("DELETE FROM investments").execute(&db).await?;
    sqlx::query("DELETE FROM users").execute(&db).await?;
    println!("Cleared existing data");

    for user in USERS {
        let hash = hash_password(user.password)?;
        sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3)")
            .bind(user.name)
            .bind(user.email)
            .bind(&hash)
            .execute(&db)
            .await?;
    }
    println!("Seeded {} users", USERS.len());

    for inv in INVESTMENTS {
        Investment::create_at(&db, inv.farmer_name, inv.amount, inv.crop, inv.created_at)
            .await?;
    }
    println!("Seeded {} investments", INVESTMENTS.len());

    let users = sqlx::query("SELECT name, email FROM users")
        .fetch_all(&db)
        .await?;
    println!("\nUsers in database:");
    for row in &users {
        let name: String = row.get("name");
        let email: String = row.get("email");
        println!("  - {name} ({email})");
    }

    let investments = Investment::list_all(&db).await?;
    println!("\nInvestments in database:");
    for inv in &investments {
        println!("  - {}: ${} ({})", inv.farmer_name, inv.amount, inv.crop);
    }

    println!("\nDatabase seeding complete!");
    println!("\nTest login credentials:");
    println!("  Email: demo@farminvest.com");
    println!("  Password: password123");

    Ok(())
}
