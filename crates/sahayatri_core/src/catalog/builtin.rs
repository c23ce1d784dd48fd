//! Built-in production content tables.
//!
//! # Responsibility
//! - Provide the shipped catalog: one tagged table per item kind, replacing
//!   the old per-age-group array copies.
//!
//! # Invariants
//! - Each entry is tagged with the stage(s) that introduce it; cumulative
//!   composition makes it visible to later stages as well.
//! - Reminder dates are derived from the caller-supplied reference day
//!   (tomorrow / next week / next month), keeping the core clock-free.

use crate::catalog::Catalog;
use crate::model::guide::{Complexity, Guide};
use crate::model::item::{Document, DocumentStatus, Priority, Recommendation, Reminder};
use crate::model::office::ServiceOffice;
use crate::model::resource::{Language, Resource, ResourceKind};
use crate::model::stage::Stage;
use chrono::{Days, Months, NaiveDate, NaiveDateTime};

impl Catalog {
    /// The shipped content set.
    ///
    /// `today` anchors the relative reminder dates; everything else is
    /// fixed content.
    pub fn builtin(today: NaiveDate) -> Self {
        Self {
            documents: documents(),
            reminders: reminders(today),
            recommendations: recommendations(),
            guides: guides(),
            offices: offices(),
            resources: resources(),
        }
    }
}

fn documents() -> Vec<Document> {
    use DocumentStatus::{Completed, NotStarted, Pending};
    use Stage::{Adult, Child, Senior, Youth};

    vec![
        doc(
            "birth-cert",
            "Birth Certificate",
            "Official record of birth issued by the government",
            "Essential",
            &[Child],
            Completed,
            None,
        ),
        doc(
            "school-id",
            "School ID Card",
            "Identification card issued by educational institution",
            "Education",
            &[Child],
            Completed,
            None,
        ),
        doc(
            "vaccination-card",
            "Vaccination Card",
            "Record of received vaccinations and schedule",
            "Health",
            &[Child],
            Pending,
            ymd(2025, 6, 10),
        ),
        doc(
            "citizenship",
            "Citizenship Certificate",
            "Primary national identity document for Nepali citizens",
            "Essential",
            &[Youth],
            NotStarted,
            ymd(2025, 7, 15),
        ),
        // Voter registration matters from youth on and is re-verified at
        // adult registration drives, hence the double tag.
        doc(
            "voter-id",
            "Voter ID Card",
            "Required for participating in national elections",
            "Government",
            &[Youth, Adult],
            NotStarted,
            None,
        ),
        doc(
            "driving-license",
            "Driving License",
            "License to operate motor vehicles on public roads",
            "Transportation",
            &[Youth],
            Pending,
            ymd(2025, 8, 22),
        ),
        doc(
            "passport",
            "Passport",
            "International travel document issued by the government",
            "Travel",
            &[Adult],
            Completed,
            None,
        ),
        doc(
            "pan-card",
            "PAN Card",
            "Permanent Account Number for tax identification",
            "Financial",
            &[Adult],
            Pending,
            ymd(2025, 9, 30),
        ),
        doc(
            "marriage-cert",
            "Marriage Certificate",
            "Legal document certifying marriage",
            "Family",
            &[Adult],
            NotStarted,
            None,
        ),
        doc(
            "property-deed",
            "Property Deed",
            "Legal document for property ownership",
            "Assets",
            &[Adult],
            NotStarted,
            None,
        ),
        doc(
            "senior-id",
            "Senior Citizen ID",
            "ID card that provides special benefits to senior citizens",
            "Government",
            &[Senior],
            NotStarted,
            ymd(2025, 10, 15),
        ),
        doc(
            "pension-papers",
            "Pension Papers",
            "Documents related to retirement benefits",
            "Financial",
            &[Senior],
            NotStarted,
            None,
        ),
        doc(
            "health-card",
            "Health Insurance Card",
            "Card for accessing health insurance benefits",
            "Health",
            &[Senior],
            Pending,
            ymd(2025, 11, 5),
        ),
        doc(
            "will",
            "Will & Testament",
            "Legal document specifying asset distribution",
            "Legal",
            &[Senior],
            NotStarted,
            None,
        ),
    ]
}

fn reminders(today: NaiveDate) -> Vec<Reminder> {
    use Priority::{High, Low, Medium};
    use Stage::{Adult, Child, Senior, Youth};

    let tomorrow = today + Days::new(1);
    let next_week = today + Days::new(7);
    let next_month = today
        .checked_add_months(Months::new(1))
        .unwrap_or(next_week);

    vec![
        rem(
            "update-info",
            "Update personal information",
            "Review and refresh your registered personal details",
            "General",
            &[Child],
            at(next_month, 9, 0),
            Low,
            false,
        ),
        rem(
            "school-enrollment",
            "School enrollment deadline",
            "Submit enrollment forms before the school year starts",
            "Education",
            &[Child],
            at(next_week, 10, 0),
            High,
            false,
        ),
        rem(
            "vaccination-appointment",
            "Vaccination appointment",
            "Scheduled dose at the local health post",
            "Health",
            &[Child],
            at(tomorrow, 11, 0),
            High,
            false,
        ),
        rem(
            "citizenship-deadline",
            "Citizenship application deadline",
            "File the citizenship application at the district office",
            "Document",
            &[Youth],
            at(next_week, 10, 0),
            High,
            false,
        ),
        rem(
            "college-deadline",
            "College application deadline",
            "Applications close for the coming intake",
            "Education",
            &[Youth],
            at(next_month, 17, 0),
            Medium,
            false,
        ),
        rem(
            "driving-test",
            "Driving license test",
            "Practical test at the transport office",
            "Transportation",
            &[Youth],
            at(tomorrow, 14, 0),
            Medium,
            true,
        ),
        rem(
            "passport-renewal",
            "Passport renewal deadline",
            "Renew before the current passport expires",
            "Document",
            &[Adult],
            at(next_month, 10, 0),
            Medium,
            false,
        ),
        rem(
            "tax-filing",
            "Tax filing deadline",
            "Annual income tax return due",
            "Financial",
            &[Adult],
            at(next_week, 9, 0),
            High,
            false,
        ),
        rem(
            "property-tax",
            "Property tax payment",
            "Municipal property tax installment due",
            "Financial",
            &[Adult],
            at(tomorrow, 15, 0),
            High,
            false,
        ),
        rem(
            "senior-id-application",
            "Senior citizen ID application",
            "Apply for the senior citizen identity card",
            "Document",
            &[Senior],
            at(next_week, 11, 0),
            High,
            false,
        ),
        rem(
            "health-checkup",
            "Health check-up appointment",
            "Routine check-up at the city hospital",
            "Health",
            &[Senior],
            at(tomorrow, 8, 30),
            High,
            false,
        ),
        rem(
            "pension-submission",
            "Pension document submission",
            "Hand in pension verification documents",
            "Financial",
            &[Senior],
            at(next_month, 13, 0),
            Medium,
            false,
        ),
    ]
}

fn recommendations() -> Vec<Recommendation> {
    use Priority::{High, Medium};
    use Stage::{Adult, Child, Senior, Youth};

    vec![
        rec(
            "vaccination-check",
            "Vaccination Check",
            "Ensure all age-appropriate vaccinations are up to date",
            "Health",
            &[Child],
            High,
        ),
        rec(
            "school-enrollment-guide",
            "School Enrollment",
            "Guide for school admission process and requirements",
            "Education",
            &[Child],
            Medium,
        ),
        rec(
            "birth-certificate-guide",
            "Birth Certificate",
            "Process for obtaining official birth documentation",
            "Document",
            &[Child],
            High,
        ),
        rec(
            "citizenship-application",
            "Citizenship Application",
            "Complete guide to obtaining your citizenship certificate",
            "Document",
            &[Youth],
            High,
        ),
        rec(
            "career-assessment",
            "Career Assessment",
            "Discover potential career paths based on your interests",
            "Career",
            &[Youth],
            Medium,
        ),
        rec(
            "college-applications",
            "College Applications",
            "Timeline and requirements for higher education",
            "Education",
            &[Youth],
            Medium,
        ),
        rec(
            "passport-application",
            "Passport Application",
            "Step-by-step process for getting your passport",
            "Document",
            &[Adult],
            Medium,
        ),
        rec(
            "property-registration",
            "Property Registration",
            "Guide to registering property and land documents",
            "Assets",
            &[Adult],
            Medium,
        ),
        rec(
            "financial-planning",
            "Financial Planning",
            "Start planning for long-term financial security",
            "Financial",
            &[Adult],
            High,
        ),
        rec(
            "senior-citizen-id",
            "Senior Citizen ID",
            "Process for obtaining senior citizen benefits",
            "Document",
            &[Senior],
            High,
        ),
        rec(
            "retirement-benefits",
            "Retirement Benefits",
            "Guide to accessing government retirement benefits",
            "Financial",
            &[Senior],
            High,
        ),
        rec(
            "healthcare-services",
            "Healthcare Services",
            "Nearby healthcare facilities for senior citizens",
            "Health",
            &[Senior],
            Medium,
        ),
    ]
}

fn guides() -> Vec<Guide> {
    use Complexity::{High, Low, Medium};

    vec![
        guide(
            "birth-certificate",
            "Birth Certificate",
            "Official record of birth issued by the government",
            "Essential Documents",
            Medium,
            "2-3 weeks",
        ),
        guide(
            "citizenship",
            "Citizenship Certificate",
            "Primary national identity document for Nepali citizens",
            "Essential Documents",
            High,
            "3-4 weeks",
        ),
        guide(
            "passport",
            "Passport",
            "International travel document issued by the government",
            "Essential Documents",
            High,
            "4-6 weeks",
        ),
        guide(
            "see-certificate",
            "SEE Certificate",
            "Secondary Education Examination certificate",
            "Education Documents",
            Low,
            "1-2 weeks",
        ),
        guide(
            "character-certificate",
            "Character Certificate",
            "Certificate of good moral conduct from educational institution",
            "Education Documents",
            Low,
            "1 week",
        ),
        guide(
            "transcript",
            "Academic Transcript",
            "Official record of academic performance",
            "Education Documents",
            Medium,
            "2 weeks",
        ),
        guide(
            "pan-card",
            "PAN Card",
            "Permanent Account Number for tax identification",
            "Financial Documents",
            Medium,
            "2-3 weeks",
        ),
        guide(
            "property-deed",
            "Property Deed",
            "Legal document for property ownership",
            "Financial Documents",
            High,
            "4-8 weeks",
        ),
        guide(
            "bank-account",
            "Bank Account",
            "Process for opening a bank account",
            "Financial Documents",
            Low,
            "1-2 days",
        ),
        guide(
            "driving-license",
            "Driving License",
            "License to operate motor vehicles on public roads",
            "Travel & Transportation",
            Medium,
            "3-4 weeks",
        ),
        guide(
            "vehicle-registration",
            "Vehicle Registration",
            "Process for registering a vehicle in your name",
            "Travel & Transportation",
            Medium,
            "1-2 weeks",
        ),
        guide(
            "bluebook",
            "Bluebook (Vehicle Ownership)",
            "Official document of vehicle ownership",
            "Travel & Transportation",
            Medium,
            "2 weeks",
        ),
        guide(
            "marriage-certificate",
            "Marriage Certificate",
            "Legal document certifying marriage",
            "Family Documents",
            Medium,
            "2 weeks",
        ),
        guide(
            "relationship-certificate",
            "Relationship Certificate",
            "Certificate proving family relationships",
            "Family Documents",
            Medium,
            "2-3 weeks",
        ),
        guide(
            "death-certificate",
            "Death Certificate",
            "Official document recording a person's death",
            "Family Documents",
            Medium,
            "1-2 weeks",
        ),
    ]
}

fn offices() -> Vec<ServiceOffice> {
    vec![
        ServiceOffice {
            id: "kathmandu-dao".to_string(),
            name: "Kathmandu District Administration Office".to_string(),
            category: "Government".to_string(),
            address: "Babar Mahal, Kathmandu".to_string(),
            contact: "01-4256789".to_string(),
            hours: "Sun-Fri 10:00 AM - 4:00 PM".to_string(),
            rating: 4.2,
            review_count: 128,
            distance_km: 2.5,
            offered_services: strings(&[
                "Citizenship Certificate",
                "Passport Application",
                "Document Verification",
            ]),
        },
        ServiceOffice {
            id: "civil-hospital".to_string(),
            name: "Civil Hospital".to_string(),
            category: "Healthcare".to_string(),
            address: "Minbhawan, Kathmandu".to_string(),
            contact: "01-4107000".to_string(),
            hours: "24/7".to_string(),
            rating: 4.5,
            review_count: 256,
            distance_km: 1.8,
            offered_services: strings(&["Emergency Care", "General Medicine", "Vaccination"]),
        },
        ServiceOffice {
            id: "transport-dept".to_string(),
            name: "Department of Transport Management".to_string(),
            category: "Government".to_string(),
            address: "Ekantakuna, Lalitpur".to_string(),
            contact: "01-5555555".to_string(),
            hours: "Sun-Fri 10:00 AM - 4:00 PM".to_string(),
            rating: 3.8,
            review_count: 92,
            distance_km: 4.2,
            offered_services: strings(&["Driving License", "Vehicle Registration", "Route Permits"]),
        },
    ]
}

fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "citizenship-guide-en".to_string(),
            title: "Guide to Citizenship Application Process".to_string(),
            description: "Step-by-step guide on how to apply for Nepali citizenship, \
                          including required documents and procedures."
                .to_string(),
            category: "Documents".to_string(),
            kind: ResourceKind::Article,
            language: Language::En,
            url: "#".to_string(),
            date_added: date(2025, 3, 15),
        },
        Resource {
            id: "citizenship-guide-ne".to_string(),
            title: "नागरिकता आवेदन प्रक्रिया गाइड".to_string(),
            description: "नेपाली नागरिकता आवेदन कसरी दिने भन्ने बारे विस्तृत जानकारी।".to_string(),
            category: "Documents".to_string(),
            kind: ResourceKind::Article,
            language: Language::Ne,
            url: "#".to_string(),
            date_added: date(2025, 3, 15),
        },
        Resource {
            id: "citizen-rights-video".to_string(),
            title: "Understanding Your Rights as a Nepali Citizen".to_string(),
            description: "Comprehensive overview of citizen rights and responsibilities in Nepal."
                .to_string(),
            category: "Legal".to_string(),
            kind: ResourceKind::Video,
            language: Language::En,
            url: "#".to_string(),
            date_added: date(2025, 3, 10),
        },
        Resource {
            id: "career-opportunities".to_string(),
            title: "Career Opportunities in Nepal".to_string(),
            description: "Explore various career paths and job opportunities available in Nepal."
                .to_string(),
            category: "Career".to_string(),
            kind: ResourceKind::Document,
            language: Language::En,
            url: "#".to_string(),
            date_added: date(2025, 3, 5),
        },
    ]
}

fn doc(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    stages: &[Stage],
    status: DocumentStatus,
    due_date: Option<NaiveDate>,
) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        applicable_stages: stages.to_vec(),
        status: Some(status),
        due_date,
    }
}

#[allow(clippy::too_many_arguments)]
fn rem(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    stages: &[Stage],
    date: NaiveDateTime,
    priority: Priority,
    completed: bool,
) -> Reminder {
    Reminder {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        applicable_stages: stages.to_vec(),
        date,
        priority,
        completed,
    }
}

fn rec(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    stages: &[Stage],
    priority: Priority,
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        applicable_stages: stages.to_vec(),
        priority,
    }
}

fn guide(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    complexity: Complexity,
    processing_time: &str,
) -> Guide {
    Guide {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        complexity,
        processing_time: processing_time.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    Some(date(year, month, day))
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).expect("valid time of day")
}
