use std::io::Write;

use anyhow::Context;

use crate::weather::WeatherResponse;

/// Prints the first current condition of `report`, or a "not found" line when there is none.
pub fn print_report<W: Write>(out: &mut W, city: &str, report: &WeatherResponse) -> anyhow::Result<()> {
    let Some(current) = report.current_condition.first() else {
        writeln!(out, "Could not find weather information.").context("failed to write report")?;
        return Ok(());
    };

    writeln!(out, "Weather for {}:", city).context("failed to write report")?;
    writeln!(out, "Temperature: {}°C", current.temp_c).context("failed to write report")?;
    writeln!(out, "Feels Like: {}°C", current.feels_like_c).context("failed to write report")?;
    if let Some(description) = current.weather_desc.first() {
        writeln!(out, "Description: {}", description.value).context("failed to write report")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::response::{CurrentCondition, WeatherDescription};

    fn render(city: &str, report: &WeatherResponse) -> String {
        let mut out = Vec::new();
        print_report(&mut out, city, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_first_condition() {
        let report = WeatherResponse {
            current_condition: vec![CurrentCondition {
                temp_c: "15".into(),
                feels_like_c: "13".into(),
                weather_desc: vec![
                    WeatherDescription { value: "Light rain".into() },
                    WeatherDescription { value: "Mist".into() },
                ],
            }],
        };

        assert_eq!(
            render("Kraków", &report),
            "Weather for Kraków:\nTemperature: 15°C\nFeels Like: 13°C\nDescription: Light rain\n"
        );
    }

    #[test]
    fn omits_missing_description() {
        let report = WeatherResponse {
            current_condition: vec![CurrentCondition {
                temp_c: "-3".into(),
                feels_like_c: "-8".into(),
                weather_desc: vec![],
            }],
        };

        let text = render("Oslo", &report);
        assert!(!text.contains("Description"));
        assert!(text.ends_with("Feels Like: -8°C\n"));
    }

    #[test]
    fn prints_not_found_without_conditions() {
        let text = render("Nowhere", &WeatherResponse::default());
        assert_eq!(text, "Could not find weather information.\n");
    }
}
