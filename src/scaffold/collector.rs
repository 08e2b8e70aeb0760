//! Interactive attribute collection
//!
//! One iteration of the loop asks for everything that defines a single
//! attribute: name, declared type, the follow-up constraints relevant to
//! that type, and the required flag. Iterations repeat until the user
//! declines to continue. Re-entering a name replaces the earlier attribute
//! and moves it to the end of the list.

use anyhow::Result;

use super::attr_type::{AttrConstraints, AttrDefinition, AttrType, DateConstraint};
use super::prompt::Prompter;

const DATE_CHOICES: [&str; 3] = ["None", "Past dates only", "Future dates only"];

/// Run the attribute loop to completion and return the accumulated list.
///
/// # Errors
///
/// Returns an error if a prompt cannot be read. Malformed numeric input is
/// not an error; it is re-asked in place.
pub fn collect_attributes(prompter: &mut dyn Prompter) -> Result<Vec<AttrDefinition>> {
    let mut attrs: Vec<AttrDefinition> = Vec::new();

    loop {
        prompter.status("Please specify an attribute:");

        let name = prompter.input("What is the name of the attribute?", "myattr")?;

        let labels: Vec<&str> = AttrType::ALL.iter().map(|t| t.label()).collect();
        let choice = prompter.select("What is the type of the attribute?", &labels, 0)?;
        let attr_type = AttrType::ALL[choice];

        let constraints = ask_constraints(prompter, attr_type)?;

        let required = prompter.confirm("Is the attribute required to have a value?", true)?;
        let again = prompter.confirm(
            "Would you like to enter another attribute or reenter a previous attribute?",
            true,
        )?;

        // Replace-by-name: drop the earlier entry, append the new one at
        // the end. An edited attribute therefore moves to the tail.
        if let Some(pos) = attrs.iter().position(|a| a.name == name) {
            attrs.remove(pos);
        }
        attrs.push(AttrDefinition {
            name,
            attr_type,
            constraints,
            required,
        });

        if !again {
            break;
        }
    }

    Ok(attrs)
}

/// Ask the follow-up questions relevant to `attr_type`.
fn ask_constraints(prompter: &mut dyn Prompter, attr_type: AttrType) -> Result<AttrConstraints> {
    match attr_type {
        AttrType::String => Ok(AttrConstraints::Length {
            min_length: ask_length(
                prompter,
                "Enter the minimum length for the String attribute, or hit enter:",
            )?,
            max_length: ask_length(
                prompter,
                "Enter the maximum length for the String attribute, or hit enter:",
            )?,
        }),
        AttrType::Integer | AttrType::Float => Ok(AttrConstraints::Range {
            min: ask_number(
                prompter,
                "Enter the minimum value for the numeric attribute, or hit enter:",
            )?,
            max: ask_number(
                prompter,
                "Enter the maximum value for the numeric attribute, or hit enter:",
            )?,
        }),
        AttrType::Date => {
            let choice = prompter.select("Constrain the date as follows:", &DATE_CHOICES, 0)?;
            Ok(AttrConstraints::Date(DateConstraint::from_label(
                DATE_CHOICES[choice],
            )))
        }
        AttrType::Enum => {
            let raw = prompter.input("Enter an enumeration of values, separated by commas", "")?;
            Ok(AttrConstraints::Values(split_enum_values(&raw)))
        }
        AttrType::Boolean => Ok(AttrConstraints::None),
    }
}

/// Ask for an optional numeric bound. Empty input leaves the bound unset;
/// non-numeric input is rejected in place and the prompt re-issued.
fn ask_number(prompter: &mut dyn Prompter, message: &str) -> Result<Option<f64>> {
    loop {
        let raw = prompter.input(message, "")?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => prompter.invalid("Please enter a number."),
        }
    }
}

/// As [`ask_number`], but for non-negative whole length bounds. Input that
/// is numeric but not a valid length (negative, fractional) gets a message
/// naming the actual requirement.
fn ask_length(prompter: &mut dyn Prompter, message: &str) -> Result<Option<u32>> {
    loop {
        let raw = prompter.input(message, "")?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) if raw.parse::<f64>().is_ok() => {
                prompter.invalid("Please enter a non-negative whole number.");
            }
            Err(_) => prompter.invalid("Please enter a number."),
        }
    }
}

/// Split comma-separated enumeration input into values, preserving each
/// segment verbatim. Wholly-empty input yields an empty list, not a single
/// empty value.
fn split_enum_values(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::to_string).collect()
}
