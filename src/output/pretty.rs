use colored::Colorize;

use crate::editor::{EditorOutcome, Notice};
use crate::pets::{Gender, Pet};
use crate::provider::Locator;

fn gender_colored(gender: Gender) -> String {
    match gender {
        Gender::Unknown => gender.label().dimmed().to_string(),
        Gender::Male => gender.label().blue().to_string(),
        Gender::Female => gender.label().magenta().to_string(),
    }
}

/// Format a list of pets as a pretty table
pub fn format_pets_pretty(pets: &[Pet]) -> String {
    if pets.is_empty() {
        return "Pets (0 items)\n  No pets yet".to_string();
    }

    let mut output = format!("Pets ({} items)\n", pets.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for pet in pets {
        let mut line = format!("{} {}", format!("#{}", pet.id).dimmed(), pet.name.bold());

        if let Some(breed) = pet.breed.as_deref().filter(|b| !b.is_empty()) {
            line.push_str(&format!("  {breed}"));
        }

        line.push_str(&format!("  {}", gender_colored(pet.gender)));
        line.push_str(&format!("  {}", format!("{} kg", pet.weight).yellow()));

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single pet as pretty output
pub fn format_pet_pretty(pet: &Pet) -> String {
    let mut output = format!("{}\n", pet.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), pet.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Locator".dimmed(),
        Locator::item(pet.id)
    ));

    if let Some(breed) = pet.breed.as_deref().filter(|b| !b.is_empty()) {
        output.push_str(&format!("  {}: {}\n", "Breed".dimmed(), breed));
    }

    output.push_str(&format!("  {}: {}\n", "Gender".dimmed(), gender_colored(pet.gender)));
    output.push_str(&format!("  {}: {} kg\n", "Weight".dimmed(), pet.weight));

    output
}

/// Format the result of an editor action
pub fn format_outcome_pretty(outcome: &EditorOutcome) -> String {
    let Some(notice) = &outcome.notice else {
        return String::new();
    };

    let mut output = match notice {
        Notice::Success(message) => format!("{} {}", "✓".green(), message.green()),
        Notice::Error(message) => format!("{} {}", "✗".red(), message.red()),
    };

    if let Some(saved) = &outcome.saved {
        output.push_str(&format!("\n  {}", saved.to_string().dimmed()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn rex() -> Pet {
        Pet {
            id: 1,
            name: "Rex".to_string(),
            breed: Some("Labrador".to_string()),
            gender: Gender::Male,
            weight: 30,
        }
    }

    #[test]
    fn test_format_pets_empty() {
        plain();
        assert_eq!(format_pets_pretty(&[]), "Pets (0 items)\n  No pets yet");
    }

    #[test]
    fn test_format_pets() {
        plain();
        let output = format_pets_pretty(&[rex()]);
        assert!(output.starts_with("Pets (1 items)\n"));
        assert!(output.contains("#1 Rex  Labrador  Male  30 kg"));
    }

    #[test]
    fn test_format_pet() {
        plain();
        let output = format_pet_pretty(&rex());
        assert!(output.contains("ID: 1"));
        assert!(output.contains("Locator: content://com.example.android.pets/pets/1"));
        assert!(output.contains("Breed: Labrador"));
        assert!(output.contains("Gender: Male"));
        assert!(output.contains("Weight: 30 kg"));
    }

    #[test]
    fn test_format_pet_without_breed() {
        plain();
        let mut pet = rex();
        pet.breed = Some(String::new());
        assert!(!format_pet_pretty(&pet).contains("Breed"));
    }

    #[test]
    fn test_format_outcome() {
        plain();
        let outcome = EditorOutcome {
            notice: Some(Notice::Success("Pet saved".to_string())),
            finished: true,
            saved: Some(Locator::item(4)),
        };
        assert_eq!(
            format_outcome_pretty(&outcome),
            "✓ Pet saved\n  content://com.example.android.pets/pets/4"
        );

        let silent = EditorOutcome {
            notice: None,
            finished: false,
            saved: None,
        };
        assert_eq!(format_outcome_pretty(&silent), "");
    }
}
