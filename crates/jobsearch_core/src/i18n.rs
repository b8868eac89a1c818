use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Sv,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "sv" | "swedish" | "svenska" => Ok(Self::Sv),
            other => Err(format!("unsupported locale `{other}`")),
        }
    }
}

/// Labels used by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    SearchPrompt,
    Loading,
    ErrorPrefix,
    NoJobsFound,
    SortBy,
    PublicationDate,
    Apply,
    CopyEmail,
    Copied,
    NotAvailable,
    Employer,
    Location,
    Application,
    Contacts,
    Published,
    Previous,
    Next,
    Close,
}

/// Text lookup for one locale.
///
/// Built once at start-up and handed to whatever renders the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    locale: Locale,
}

impl Translations {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        match self.locale {
            Locale::En => english(key),
            Locale::Sv => swedish(key),
        }
    }

    pub fn page_summary(&self, current_page: u32, total_pages: u32, total_count: u64) -> String {
        match self.locale {
            Locale::En => {
                format!("Page {current_page} of {total_pages} - Total Records: {total_count}")
            }
            Locale::Sv => {
                format!("Sida {current_page} av {total_pages} - Totalt antal: {total_count}")
            }
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Search for jobs in Sweden",
        TextKey::SearchPrompt => "Search for Frontend or Göteborg or Volvo",
        TextKey::Loading => "Loading...",
        TextKey::ErrorPrefix => "Error",
        TextKey::NoJobsFound => "No jobs found. Please try a different search term.",
        TextKey::SortBy => "Sort by",
        TextKey::PublicationDate => "Publication Date",
        TextKey::Apply => "Apply",
        TextKey::CopyEmail => "Copy Email",
        TextKey::Copied => "Copied!",
        TextKey::NotAvailable => "N/A",
        TextKey::Employer => "Employer",
        TextKey::Location => "Job Location",
        TextKey::Application => "Application",
        TextKey::Contacts => "Contact Details",
        TextKey::Published => "Published Date",
        TextKey::Previous => "Previous",
        TextKey::Next => "Next",
        TextKey::Close => "Close",
    }
}

fn swedish(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Sök jobb i Sverige",
        TextKey::SearchPrompt => "Sök efter Frontend eller Göteborg eller Volvo",
        TextKey::Loading => "Laddar...",
        TextKey::ErrorPrefix => "Fel",
        TextKey::NoJobsFound => "Inga jobb hittades. Försök med ett annat sökord.",
        TextKey::SortBy => "Sortera efter",
        TextKey::PublicationDate => "Publiceringsdatum",
        TextKey::Apply => "Ansök",
        TextKey::CopyEmail => "Kopiera e-post",
        TextKey::Copied => "Kopierat!",
        TextKey::NotAvailable => "Saknas",
        TextKey::Employer => "Arbetsgivare",
        TextKey::Location => "Ort",
        TextKey::Application => "Ansökan",
        TextKey::Contacts => "Kontaktuppgifter",
        TextKey::Published => "Publicerad",
        TextKey::Previous => "Föregående",
        TextKey::Next => "Nästa",
        TextKey::Close => "Stäng",
    }
}
