// src/posting.rs

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Posting {
    pub title: String,
    pub company: String,
    pub education: String,
    pub department: String,
    pub sector: String,
    pub location: String,
    // insertion order preserved, duplicates kept
    pub skills: Vec<String>,
    pub duration: String,
    pub stipend: String,
}
