// src/seeder.rs

use mongodb::error::Result;
//
use crate::{db::Db, posting::Posting};

const PREVIEW_LEN: i64 = 3;

#[derive(Clone, Debug)]
pub struct SeedSummary {
    pub cleared: u64,
    pub inserted: usize,
    pub total: u64,
    pub preview: Vec<Posting>,
}

pub struct Seeder {
    pub db: Db,
    pub postings: Vec<Posting>,
}

impl Seeder {
    pub fn new(db: Db, postings: Vec<Posting>) -> Self {
        Self { db, postings }
    }

    // clear -> insert -> count -> preview, one linear pass
    pub async fn run(&self) -> Result<SeedSummary> {
        let cleared = self.db.clear_postings().await?;
        let inserted = self.db.insert_postings(&self.postings).await?;

        // total comes from the collection, not the insert result
        let total = self.db.count_postings().await?;
        let preview = self.db.first_postings(PREVIEW_LEN).await?;

        Ok(SeedSummary {
            cleared,
            inserted,
            total,
            preview,
        })
    }
}

pub fn render_report(summary: &SeedSummary) -> String {
    let mut report = String::new();

    report.push_str(&format!("Cleared {} existing postings\n", summary.cleared));
    report.push_str(&format!("Inserted {} sample postings\n", summary.inserted));
    report.push_str(&format!(
        "Total postings in collection: {}\n",
        summary.total
    ));

    report.push_str("\nSample postings:\n");
    for (i, posting) in summary.preview.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} at {}\n",
            i + 1,
            posting.title,
            posting.company
        ));
        report.push_str(&format!(
            "   Education: {}, Department: {}\n",
            posting.education, posting.department
        ));
        report.push_str(&format!("   Skills: {}\n\n", posting.skills.join(", ")));
    }

    report
}
