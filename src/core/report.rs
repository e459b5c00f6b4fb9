use crate::domain::model::{LoadResult, OutputFormat, Person, RenderedOutput};
use crate::utils::error::{Result, RosterError};

/// `[Alice (30), Bob (25)]`
pub fn inspect_list(people: &[Person]) -> String {
    let items: Vec<String> = people.iter().map(Person::inspect).collect();
    format!("[{}]", items.join(", "))
}

pub fn render(result: &LoadResult, format: OutputFormat) -> Result<RenderedOutput> {
    let content = match format {
        OutputFormat::Inspect => format!(
            "{}\n{}\n",
            inspect_list(&result.records),
            inspect_list(&result.sorted)
        ),
        OutputFormat::Csv => render_csv(&result.sorted)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            json
        }
    };

    Ok(RenderedOutput { format, content })
}

fn render_csv(people: &[Person]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for person in people {
        writer.serialize(person)?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| RosterError::IoError(e.into_error()))?;
    // names come from lossy-decoded lines, so this is always valid UTF-8
    Ok(String::from_utf8_lossy(&data).into_owned())
}
