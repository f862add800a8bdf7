use roster_generator::{GenerationSettings, RosterError, generate_records, write_roster_csv};
use roster_models::{Role, RosterRequest};

fn row_count(csv: &str) -> usize {
    csv.split("\r\n").filter(|line| !line.is_empty()).count()
}

#[test]
fn test_row_count_matches_range() {
    let settings = GenerationSettings::default();

    for (start, end) in [(1, 2), (1, 3), (600, 620), (49_000, 50_000)] {
        let request = RosterRequest::new(start, end, "BSC", Role::Teacher);
        let records = generate_records(&request, &settings);
        let csv = write_roster_csv(&records, None).unwrap();

        assert_eq!(row_count(&csv) as u64, end - start + 2);
    }
}

#[test]
fn test_comment_row_adds_one_line() {
    let settings = GenerationSettings::default();
    let request = RosterRequest::new(10, 20, "BSC", Role::Student);
    let records = generate_records(&request, &settings);

    let plain = write_roster_csv(&records, None).unwrap();
    let commented = write_roster_csv(&records, Some("exclude user 15")).unwrap();

    assert_eq!(row_count(&commented), row_count(&plain) + 1);
    assert!(commented.starts_with("# exclude user 15\r\n"));
}

#[test]
fn test_emails_follow_vano_in_order() {
    let settings = GenerationSettings::default();
    let request = RosterRequest::new(95, 105, "MCA", Role::Student);

    let records = generate_records(&request, &settings);

    assert_eq!(records.len(), 11);
    for (record, vano) in records.iter().zip(95u64..) {
        assert_eq!(record.vano.value(), vano);
        assert_eq!(record.email, format!("{}@velsrscollege.com", vano));
        assert_eq!(record.password.len(), 10);
    }
}

#[test]
fn test_validation_order() {
    let limits = GenerationSettings::default().limits;

    let inverted = RosterRequest::new(5, 3, "BSC", Role::Teacher).with_instruction("x");
    match roster_generator::validate_request(&inverted, &limits) {
        Err(RosterError::Validation(message)) => {
            assert_eq!(message, "Starting value must be smaller than ending value.")
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let too_many = RosterRequest::new(1, 60_000, "BSC", Role::Teacher);
    assert!(matches!(
        roster_generator::validate_request(&too_many, &limits),
        Err(RosterError::Validation(_))
    ));

    let too_many_ai =
        RosterRequest::new(1, 300, "BSC", Role::Teacher).with_instruction("exclude user 150");
    match roster_generator::validate_request(&too_many_ai, &limits) {
        Err(RosterError::Validation(message)) => {
            assert_eq!(message, "AI editing only supports up to 290 users in one batch.")
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let ok_ai = RosterRequest::new(1, 290, "BSC", Role::Teacher).with_instruction("exclude user 150");
    assert!(roster_generator::validate_request(&ok_ai, &limits).is_ok());
}
