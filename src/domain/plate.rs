// Plate domain model
#[derive(Debug, Clone)]
pub struct Plate {
    pub number: String,
}

impl Plate {
    /// A plate identifier must be a whole number; anything else in the
    /// configured plate list is skipped by the orchestrator.
    pub fn new(number: &str) -> Option<Self> {
        let trimmed = number.trim();
        if trimmed.is_empty() || trimmed.parse::<u64>().is_err() {
            return None;
        }
        Some(Self {
            number: trimmed.to_string(),
        })
    }

    pub fn svg_file_name(&self) -> String {
        format!("{}.svg", self.number)
    }

    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.number)
    }
}
