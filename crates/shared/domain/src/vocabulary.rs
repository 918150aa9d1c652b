//! Closed vocabularies used by the job-seeker profile.
//!
//! Every vocabulary serializes to the exact label shown in the product and
//! rejects anything else. Deserialization goes through `FromStr`, so an
//! unknown label fails with the same `enum` violation either way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String")]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ValidationError::new($field, "enum", other)),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Healthcare specialty tag
    Specialization ("specializations") {
        GeneralMedicine => "General Medicine",
        Cardiology => "Cardiology",
        Neurology => "Neurology",
        Orthopedics => "Orthopedics",
        Pediatrics => "Pediatrics",
        Gynecology => "Gynecology",
        Dermatology => "Dermatology",
        Psychiatry => "Psychiatry",
        Radiology => "Radiology",
        Anesthesiology => "Anesthesiology",
        EmergencyMedicine => "Emergency Medicine",
        InternalMedicine => "Internal Medicine",
        Surgery => "Surgery",
        Oncology => "Oncology",
        Pathology => "Pathology",
        Ophthalmology => "Ophthalmology",
        Ent => "ENT",
        Urology => "Urology",
        Gastroenterology => "Gastroenterology",
        Pulmonology => "Pulmonology",
        Endocrinology => "Endocrinology",
        Rheumatology => "Rheumatology",
        Nephrology => "Nephrology",
        Hematology => "Hematology",
        InfectiousDisease => "Infectious Disease",
        PhysicalTherapy => "Physical Therapy",
        OccupationalTherapy => "Occupational Therapy",
        SpeechTherapy => "Speech Therapy",
        Nursing => "Nursing",
        Pharmacy => "Pharmacy",
        MedicalTechnology => "Medical Technology",
        Other => "Other",
    }
}

vocabulary! {
    /// Academic or professional qualification
    Degree ("education.degree") {
        Mbbs => "MBBS",
        Md => "MD",
        Ms => "MS",
        Bds => "BDS",
        Mds => "MDS",
        Bpt => "BPT",
        Mpt => "MPT",
        BscNursing => "BSc Nursing",
        MscNursing => "MSc Nursing",
        BPharm => "BPharm",
        MPharm => "MPharm",
        Bsc => "BSc",
        Msc => "MSc",
        Phd => "PhD",
        Diploma => "Diploma",
        Certificate => "Certificate",
        Other => "Other",
    }
}

vocabulary! {
    SkillLevel ("skills.level") {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
        Expert => "Expert",
    }
}

vocabulary! {
    JobType ("jobPreferences.preferredJobTypes") {
        FullTime => "Full-time",
        PartTime => "Part-time",
        Contract => "Contract",
        Freelance => "Freelance",
        Internship => "Internship",
        Volunteer => "Volunteer",
    }
}

vocabulary! {
    Shift ("jobPreferences.preferredShifts") {
        Day => "Day",
        Night => "Night",
        Rotating => "Rotating",
        Flexible => "Flexible",
    }
}

vocabulary! {
    Currency ("jobPreferences.expectedSalary.currency") {
        Inr => "INR",
        Usd => "USD",
        Eur => "EUR",
        Gbp => "GBP",
    }
}

vocabulary! {
    SalaryPeriod ("jobPreferences.expectedSalary.period") {
        Hourly => "Hourly",
        Daily => "Daily",
        Monthly => "Monthly",
        Annual => "Annual",
    }
}

vocabulary! {
    /// Notice period before the candidate can join
    Availability ("jobPreferences.availability") {
        Immediately => "Immediately",
        TwoWeeks => "2 weeks",
        OneMonth => "1 month",
        TwoMonths => "2 months",
        ThreeMonths => "3 months",
        Negotiable => "Negotiable",
    }
}

vocabulary! {
    RemoteWorkPreference ("jobPreferences.remoteWorkPreference") {
        OnSiteOnly => "On-site only",
        RemoteOnly => "Remote only",
        Hybrid => "Hybrid",
        NoPreference => "No preference",
    }
}

vocabulary! {
    PortfolioKind ("portfolio.type") {
        Document => "Document",
        Image => "Image",
        Video => "Video",
        Link => "Link",
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Intermediate
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Inr
    }
}

impl Default for SalaryPeriod {
    fn default() -> Self {
        SalaryPeriod::Annual
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::Negotiable
    }
}

impl Default for RemoteWorkPreference {
    fn default() -> Self {
        RemoteWorkPreference::NoPreference
    }
}

impl Default for PortfolioKind {
    fn default() -> Self {
        PortfolioKind::Link
    }
}
