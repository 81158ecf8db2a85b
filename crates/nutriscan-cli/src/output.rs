//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use nutriscan_domain::{AnalysisResult, Ingredient, ScoreTier};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis.
    pub fn format_analysis(&self, analysis: &AnalysisResult) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            CliFormat::Table => Ok(self.format_analysis_text(analysis)),
        }
    }

    /// Human-readable view: header, score, notice, ingredient buckets, sources.
    fn format_analysis_text(&self, analysis: &AnalysisResult) -> String {
        let mut out = String::new();

        out.push_str(&self.colorize(&analysis.product_name, "cyan"));
        out.push('\n');
        out.push_str(&self.score_line(analysis.health_score, analysis.tier()));
        out.push_str("\n\n");
        out.push_str(&analysis.summary);
        out.push_str("\n\n");

        if let Some(notice) = &analysis.fssai_notice {
            out.push_str(&self.warning(&format!("FSSAI notice: {}", notice)));
            out.push_str("\n\n");
        }

        let concerns: Vec<&Ingredient> = analysis.concerns().collect();
        let safe: Vec<&Ingredient> = analysis.safe_ingredients().collect();

        out.push_str(&self.colorize(&format!("Concerns ({})", concerns.len()), "red"));
        out.push('\n');
        out.push_str(&self.ingredient_table(&concerns));
        out.push_str("\n\n");

        out.push_str(&self.colorize(&format!("Safe ({})", safe.len()), "green"));
        out.push('\n');
        out.push_str(&self.ingredient_table(&safe));

        if !analysis.sources.is_empty() {
            out.push_str("\n\nSources:\n");
            for source in &analysis.sources {
                out.push_str(&format!("  - {} <{}>\n", source.title, source.uri));
            }
        }

        out
    }

    /// Format the health score with its tier colour.
    pub fn score_line(&self, score: u8, tier: ScoreTier) -> String {
        let color = match tier {
            ScoreTier::Favorable => "green",
            ScoreTier::Caution => "yellow",
            ScoreTier::Adverse => "red",
        };
        self.colorize(
            &format!("Health score: {}/100 ({})", score, tier.as_str()),
            color,
        )
    }

    fn ingredient_table(&self, ingredients: &[&Ingredient]) -> String {
        if ingredients.is_empty() {
            return "  (none)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["Ingredient", "Quantity", "Status", "Details"]);

        for ingredient in ingredients {
            builder.push_record([
                ingredient.name.as_str(),
                ingredient.quantity.as_str(),
                ingredient.status.as_str(),
                ingredient.description.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_domain::{IngredientStatus, Source};

    fn create_test_analysis() -> AnalysisResult {
        AnalysisResult {
            product_name: "Test Snack".to_string(),
            summary: "High in sugar.".to_string(),
            ingredients: vec![
                Ingredient::new("Sugar", "35g", IngredientStatus::Harmful, "Refined sugar"),
                Ingredient::new("Rice Flour", "40%", IngredientStatus::Healthy, "Base"),
            ],
            sources: vec![Source {
                title: "FSSAI".to_string(),
                uri: "https://fssai.gov.in".to_string(),
            }],
            fssai_notice: Some("Contains banned dye X".to_string()),
            health_score: 35,
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(CliFormat::Json, false);
        let output = formatter.format_analysis(&create_test_analysis()).unwrap();
        assert!(output.contains("\"productName\": \"Test Snack\""));
        assert!(output.contains("\"healthScore\": 35"));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(CliFormat::Table, false);
        let output = formatter.format_analysis(&create_test_analysis()).unwrap();
        assert!(output.contains("Health score: 35/100 (adverse)"));
        assert!(output.contains("Concerns (1)"));
        assert!(output.contains("Safe (1)"));
        assert!(output.contains("FSSAI notice: Contains banned dye X"));
        assert!(output.contains("https://fssai.gov.in"));
    }

    #[test]
    fn test_empty_bucket() {
        let mut analysis = create_test_analysis();
        analysis.ingredients.remove(0);
        let formatter = Formatter::new(CliFormat::Table, false);
        let output = formatter.format_analysis(&analysis).unwrap();
        assert!(output.contains("Concerns (0)\n  (none)"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(CliFormat::Table, false);
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}
