//! CSV serialization.
//!
//! Layout: an optional `# <instruction>` comment row, the header row, then
//! one row per record. Fields are quoted only when needed and records end
//! with CRLF.

use roster_models::{CSV_HEADER, UserRecord};

use crate::error::RosterError;

pub fn write_roster_csv(
    records: &[UserRecord],
    instruction: Option<&str>,
) -> Result<String, RosterError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::with_capacity((records.len() + 2) * 64));

    if let Some(instruction) = instruction {
        writer.write_record([format!("# {}", instruction)])?;
    }
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_models::{Role, Vano};

    fn record(vano: u64, department: &str) -> UserRecord {
        UserRecord {
            vano: Vano::new(vano),
            email: Vano::new(vano).email("x.com"),
            password: "Ab3$Ab3$Ab".to_string(),
            role: Role::Teacher,
            department: department.to_string(),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let csv = write_roster_csv(&[record(1, "BSC"), record(2, "BSC")], None).unwrap();
        assert_eq!(
            csv,
            "name,email,password,role,department\r\n\
             1,1@x.com,Ab3$Ab3$Ab,teacher,BSC\r\n\
             2,2@x.com,Ab3$Ab3$Ab,teacher,BSC\r\n"
        );
    }

    #[test]
    fn test_instruction_comment_row() {
        let csv = write_roster_csv(&[record(1, "BSC")], Some("don't add user 610")).unwrap();
        let first = csv.lines().next().unwrap();
        assert_eq!(first, "# don't add user 610");
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let csv = write_roster_csv(&[record(1, "Physics, Applied")], Some("skip 2, 3")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"# skip 2, 3\"");
        assert_eq!(lines[2], "1,1@x.com,Ab3$Ab3$Ab,teacher,\"Physics, Applied\"");
    }

    #[test]
    fn test_empty_records_still_has_header() {
        let csv = write_roster_csv(&[], None).unwrap();
        assert_eq!(csv, "name,email,password,role,department\r\n");
    }
}
