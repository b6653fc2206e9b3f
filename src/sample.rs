// src/sample.rs

use crate::posting::Posting;

fn posting(
    title: &str,
    company: &str,
    education: &str,
    department: &str,
    sector: &str,
    location: &str,
    skills: &[&str],
    duration: &str,
    stipend: &str,
) -> Posting {
    Posting {
        title: title.to_string(),
        company: company.to_string(),
        education: education.to_string(),
        department: department.to_string(),
        sector: sector.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        duration: duration.to_string(),
        stipend: stipend.to_string(),
    }
}

// The fixed reference dataset. Every run wipes the collection and writes
// exactly these eight postings.
pub fn sample_postings() -> Vec<Posting> {
    vec![
        posting(
            "Software Development Intern",
            "TechCorp",
            "B.Tech",
            "CSE",
            "Technology",
            "Bangalore",
            &["Python", "JavaScript", "React", "Node.js"],
            "6 months",
            "25000",
        ),
        posting(
            "Data Science Intern",
            "DataViz Inc",
            "B.Tech",
            "CSE",
            "Technology",
            "Mumbai",
            &["Python", "Machine Learning", "Pandas", "NumPy"],
            "3 months",
            "30000",
        ),
        posting(
            "Marketing Intern",
            "BrandCo",
            "BBA",
            "Management",
            "Marketing",
            "Delhi",
            &["Digital Marketing", "Social Media", "Analytics"],
            "4 months",
            "15000",
        ),
        posting(
            "Finance Intern",
            "FinanceFirst",
            "B.Com",
            "Commerce",
            "Finance",
            "Chennai",
            &["Excel", "Financial Analysis", "Accounting"],
            "6 months",
            "20000",
        ),
        posting(
            "Web Development Intern",
            "WebSolutions",
            "B.Tech",
            "IT",
            "Technology",
            "Bangalore",
            &["HTML", "CSS", "JavaScript", "React", "Python"],
            "5 months",
            "22000",
        ),
        posting(
            "UI/UX Design Intern",
            "DesignStudio",
            "B.Tech",
            "CSE",
            "Design",
            "Pune",
            &["Figma", "Adobe XD", "User Research", "Prototyping"],
            "4 months",
            "18000",
        ),
        posting(
            "Business Analyst Intern",
            "BusinessTech",
            "MBA",
            "Management",
            "Consulting",
            "Hyderabad",
            &["SQL", "Excel", "Power BI", "Business Analysis"],
            "6 months",
            "35000",
        ),
        posting(
            "Mobile App Development Intern",
            "MobileFirst",
            "B.Tech",
            "CSE",
            "Technology",
            "Bangalore",
            &["React Native", "Flutter", "JavaScript", "Firebase"],
            "6 months",
            "28000",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_eight_postings() {
        assert_eq!(sample_postings().len(), 8);
    }

    #[test]
    fn all_fields_populated() {
        for p in sample_postings() {
            assert!(!p.title.is_empty());
            assert!(!p.company.is_empty());
            assert!(!p.education.is_empty());
            assert!(!p.department.is_empty());
            assert!(!p.sector.is_empty());
            assert!(!p.location.is_empty());
            assert!(!p.skills.is_empty());
            assert!(p.skills.iter().all(|s| !s.is_empty()));
            assert!(!p.duration.is_empty());
            assert!(!p.stipend.is_empty());
        }
    }

    #[test]
    fn skills_keep_source_order() {
        let postings = sample_postings();
        assert_eq!(
            postings[0].skills,
            vec!["Python", "JavaScript", "React", "Node.js"]
        );
    }

    #[test]
    fn finance_intern_values() {
        let postings = sample_postings();
        let finance = postings
            .iter()
            .find(|p| p.title == "Finance Intern")
            .unwrap();
        assert_eq!(finance.company, "FinanceFirst");
        assert_eq!(finance.education, "B.Com");
        assert_eq!(finance.stipend, "20000");
    }
}
