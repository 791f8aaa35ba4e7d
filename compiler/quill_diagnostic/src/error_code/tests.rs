use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_phase_ranges_are_disjoint() {
    let all = [
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1005,
        ErrorCode::E1008,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
    ];

    for code in all {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_eval_error(),
        ];
        assert_eq!(phases.iter().filter(|p| **p).count(), 1, "{code}");

        let digit = code.as_str().as_bytes()[1];
        match digit {
            b'0' => assert!(code.is_lexer_error()),
            b'1' => assert!(code.is_parser_error()),
            b'6' => assert!(code.is_eval_error()),
            _ => panic!("unexpected phase digit in {code}"),
        }
    }
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(ErrorCode::E1008.to_string(), "E1008");
}
