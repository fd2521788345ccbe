use resxkit::ResourceEntry;
use serde::Serialize;

/// One entry listed by `new` or `empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<&ResourceEntry> for ReportEntry {
    fn from(entry: &ResourceEntry) -> Self {
        ReportEntry {
            name: entry.name.clone(),
            value: entry.value_or_empty().to_string(),
            comment: entry.comment().map(str::to_string),
        }
    }
}

/// Result of comparing a source document with one target document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectReport {
    pub source: String,
    pub target: String,
    pub target_available: bool,
    pub entries: Vec<ReportEntry>,
}

impl CollectReport {
    pub fn print_text(&self) {
        if !self.target_available {
            println!("(target {} not available, listing every entry)", self.target);
        }
        for entry in &self.entries {
            println!("{}", entry.name);
        }
    }
}

/// Per-culture counts printed by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CultureStatus {
    pub culture: String,
    pub target: String,
    pub target_available: bool,
    pub new: usize,
    pub empty: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub source: String,
    pub translatable: usize,
    pub cultures: Vec<CultureStatus>,
}

impl StatusReport {
    pub fn print_text(&self) {
        println!("{} ({} translatable strings)", self.source, self.translatable);
        for culture in &self.cultures {
            if culture.target_available {
                println!(
                    "  {:<8} new: {:>4}  empty: {:>4}",
                    culture.culture, culture.new, culture.empty
                );
            } else {
                println!("  {:<8} missing ({})", culture.culture, culture.target);
            }
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Cannot serialize report to JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}
