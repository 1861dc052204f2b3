//! Fixed field vocabularies for job postings.
//!
//! Each vocabulary is stored and transported as its display label, so the
//! enums serialise as plain strings and parse back from the exact label.
//! Validation rejects any label outside these lists.

use std::fmt;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every admissible value, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The label stored in the database and shown in forms.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Parse a stored label, returning `None` for anything unknown.
            #[must_use]
            pub fn parse(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Self::parse(&label).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        concat!("unknown ", stringify!($name), " label: {}"),
                        label
                    ))
                })
            }
        }
    };
}

label_enum! {
    /// Job category shown as a badge on listing cards.
    Category {
        Administrative => "Administrative",
        Childcare => "Childcare",
        ConstructionTrades => "Construction & Trades",
        Creative => "Creative",
        Education => "Education",
        Engineering => "Engineering",
        Finance => "Finance",
        Healthcare => "Healthcare",
        Hospitality => "Hospitality",
        Legal => "Legal",
        Ministry => "Ministry",
        Nonprofit => "Nonprofit",
        Recreation => "Recreation",
        Restaurant => "Restaurant",
        Retail => "Retail",
        SalesMarketing => "Sales & Marketing",
        Technology => "Technology",
        Other => "Other",
    }
}

label_enum! {
    /// Employment arrangement for the position.
    EmploymentType {
        FullTime => "Full-time",
        PartTime => "Part-time",
        Contract => "Contract",
        Internship => "Internship",
        Volunteer => "Volunteer",
    }
}

label_enum! {
    /// Whether the advertised salary is an annual figure or an hourly rate.
    SalaryType {
        Yearly => "Yearly",
        PerHour => "Per Hour",
    }
}

label_enum! {
    /// Where the work happens.
    WorkPresence {
        Remote => "Remote",
        InPerson => "In person",
        Hybrid => "Hybrid",
    }
}

label_enum! {
    /// Discriminator selecting which single application channel is active.
    HowToApply {
        ApplyOnline => "applyOnline",
        EmailResume => "emailResume",
        CallPhone => "callPhone",
        CustomInstructions => "customInstructions",
    }
}
