// src/main.rs

pub mod db;
pub mod posting;
pub mod sample;
pub mod seeder;

use std::error;
//
use crate::db::{Config, Db};
use crate::seeder::{render_report, Seeder};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn error::Error>> {
    let config = Config::from_env();

    println!(
        "Seeding sample internship postings into {}/{}",
        config.database, config.collection
    );

    let db = Db::connect(&config).await?;
    let seeder = Seeder::new(db, sample::sample_postings());

    let summary = seeder.run().await?;

    print!("{}", render_report(&summary));
    println!("Sample data seeding completed");

    Ok(())
}
