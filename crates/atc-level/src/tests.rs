#[cfg(test)]
mod tests {
    use glam::IVec2;
    use proptest::prelude::*;

    use crate::builtin;
    use crate::error::LevelError;
    use crate::parser::{parse, parse_named};

    const HEADER: &str = "update = 5;\nnewplane = 5;\nwidth = 10;\nheight = 10;\n";

    fn with_header(body: &str) -> String {
        format!("{HEADER}{body}")
    }

    // ---- Valid levels ----

    #[test]
    fn test_small_arena_with_exit_and_airport() {
        let text = with_header("exit: (9 5 d);\nairport: (5 8 x);\n");
        let geometry = parse(&text).unwrap();
        assert_eq!(geometry.width, 10);
        assert_eq!(geometry.height, 10);
        assert_eq!(geometry.update_secs, 5);
        assert_eq!(geometry.new_plane_time, 5);
        assert_eq!(geometry.exits[0].pos, IVec2::new(9, 5));
        assert_eq!(geometry.exits[0].dir, 2);
        assert_eq!(geometry.airports[0].pos, IVec2::new(5, 8));
        assert_eq!(geometry.airports[0].dir, 4);
    }

    #[test]
    fn test_statements_may_span_lines() {
        let text = "update\n=\n3;   newplane = 2;\n\n\nwidth = 8;\nheight = 6;\n\
                    exit: ( 0 2 a )\n      ( 7 2 d );\nbeacon:\n(3 3)\n(4 2);";
        let geometry = parse(text).unwrap();
        assert_eq!(geometry.update_secs, 3);
        assert_eq!(geometry.exits.len(), 2);
        assert_eq!(geometry.beacons.len(), 2);
    }

    #[test]
    fn test_reparse_is_value_equal() {
        let text = builtin::source("default").unwrap();
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn test_every_builtin_level_parses() {
        for name in builtin::names() {
            let geometry = builtin::load(name).unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(geometry.endpoint_count() >= 2);
        }
        assert_eq!(builtin::names().next(), Some(builtin::DEFAULT_LEVEL));
    }

    #[test]
    fn test_unknown_builtin_level() {
        assert_eq!(
            builtin::load("nowhere"),
            Err(LevelError::UnknownLevel {
                name: "nowhere".to_string()
            })
        );
    }

    // ---- Scalars ----

    #[test]
    fn test_redefinition_names_field() {
        for field in ["update", "newplane", "width", "height"] {
            let text = format!("{HEADER}{field} = 4;\n");
            let err = parse(&text).unwrap_err();
            assert_eq!(err, LevelError::Redefinition { field });
            assert!(err.to_string().contains(field));
        }
    }

    #[test]
    fn test_scalar_minimums() {
        let err = parse("width = 2;").unwrap_err();
        assert_eq!(err, LevelError::TooSmall { field: "width", min: 3 });
        let err = parse("newplane = 0;").unwrap_err();
        assert_eq!(
            err,
            LevelError::TooSmall {
                field: "newplane",
                min: 1
            }
        );
    }

    #[test]
    fn test_arena_size_is_capped() {
        let text = "update = 1; newplane = 1; width = 2000000000; height = 2000000000;\n\
                    exit: (0 5 a) (1999999999 5 d);";
        let err = parse(text).unwrap_err();
        assert_eq!(
            err,
            LevelError::TooLarge {
                field: "width",
                max: 1000
            }
        );
        assert!(parse("update = 1; newplane = 1; width = 1000; height = 1000;\n\
                       exit: (0 5 a) (999 5 d);")
        .is_ok());
    }

    #[test]
    fn test_number_too_large_for_a_coordinate() {
        let err = parse("width = 99999999999;").unwrap_err();
        assert_eq!(
            err,
            LevelError::NumberTooLarge {
                digits: "99999999999".to_string()
            }
        );
        let err = parse(&with_header("beacon: (4 4294967296);")).unwrap_err();
        assert!(matches!(err, LevelError::NumberTooLarge { .. }));
    }

    #[test]
    fn test_entities_require_all_scalars() {
        let err = parse("update = 5;\nwidth = 10;\nheight = 10;\nexit: (9 5 d);").unwrap_err();
        assert_eq!(err, LevelError::MissingScalars);
    }

    #[test]
    fn test_missing_scalars_at_end() {
        let err = parse("update = 5;\nwidth = 10;\nheight = 10;").unwrap_err();
        assert_eq!(err, LevelError::MissingScalars);
    }

    // ---- Syntax ----

    #[test]
    fn test_syntax_error_names_level_and_statement() {
        let err = parse_named("box", &with_header("runway: (1 1 w);")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected line in box: runway: (1 1 w);"
        );
    }

    #[test]
    fn test_garbage_inside_point_list_is_rejected() {
        let err = parse(&with_header("beacon: (2 2) junk (3 3);")).unwrap_err();
        assert!(matches!(err, LevelError::Syntax { .. }));
    }

    #[test]
    fn test_bad_direction_key() {
        let err = parse(&with_header("exit: (9 5 k);")).unwrap_err();
        assert_eq!(err, LevelError::BadDirection { key: 'k' });
    }

    #[test]
    fn test_uppercase_direction_key_is_rejected() {
        let err = parse(&with_header("exit: (9 5 D);")).unwrap_err();
        assert_eq!(err, LevelError::BadDirection { key: 'D' });
    }

    #[test]
    fn test_negative_numbers_are_syntax_errors() {
        let err = parse("width = -4;").unwrap_err();
        assert!(matches!(err, LevelError::Syntax { .. }));
    }

    // ---- Placement ----

    #[test]
    fn test_beacon_on_boundary_is_out_of_range() {
        let err = parse(&with_header("beacon: (0 4);")).unwrap_err();
        assert!(matches!(
            err,
            LevelError::PointOutOfRange { kind: "beacon", x: 0, y: 4, .. }
        ));
    }

    #[test]
    fn test_airport_on_boundary_is_out_of_range() {
        let err = parse(&with_header("airport: (5 9 x);")).unwrap_err();
        assert!(matches!(
            err,
            LevelError::PointOutOfRange { kind: "airport", .. }
        ));
    }

    #[test]
    fn test_exit_must_be_on_edge() {
        let err = parse(&with_header("exit: (4 4 d);")).unwrap_err();
        assert_eq!(err, LevelError::NotOnEdge { x: 4, y: 4 });
    }

    #[test]
    fn test_exit_on_edge_line_but_outside_arena() {
        let err = parse(&with_header("exit: (0 500 a) (9 500 d);")).unwrap_err();
        assert_eq!(err, LevelError::NotOnEdge { x: 0, y: 500 });
        let err = parse(&with_header("exit: (9 5 d) (12 0 w);")).unwrap_err();
        assert_eq!(err, LevelError::NotOnEdge { x: 12, y: 0 });
    }

    #[test]
    fn test_exit_must_point_outward() {
        // Right edge, heading west: into the arena.
        let err = parse(&with_header("exit: (9 5 a);")).unwrap_err();
        assert_eq!(err, LevelError::BadExitDirection { x: 9, y: 5, dir: 6 });
        // Top-left corner only allows north-west.
        let err = parse(&with_header("exit: (0 0 w);")).unwrap_err();
        assert_eq!(err, LevelError::BadExitDirection { x: 0, y: 0, dir: 0 });
        assert!(parse(&with_header("exit: (0 0 q) (9 9 c);")).is_ok());
    }

    #[test]
    fn test_line_shapes() {
        let ok = with_header("exit: (0 5 a) (9 5 d);\nline: [(1 1)(8 8)] [(0 3)(9 3)] [(4 0)(4 9)];");
        assert_eq!(parse(&ok).unwrap().lines.len(), 3);

        let bent = with_header("exit: (0 5 a) (9 5 d);\nline: [(1 1)(3 2)];");
        assert_eq!(
            parse(&bent).unwrap_err(),
            LevelError::BadLine {
                from: (1, 1),
                to: (3, 2)
            }
        );

        let outside = with_header("exit: (0 5 a) (9 5 d);\nline: [(1 1)(10 1)];");
        assert!(matches!(
            parse(&outside).unwrap_err(),
            LevelError::PointOutOfRange { kind: "line endpoint", .. }
        ));
    }

    #[test]
    fn test_needs_two_destinations() {
        let err = parse(&with_header("exit: (9 5 d);\nbeacon: (4 4);")).unwrap_err();
        assert_eq!(err, LevelError::InsufficientDestinations { found: 1 });
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_parse_is_deterministic(
            update in 1u32..60,
            newplane in 1u32..60,
            width in 3u32..60,
            height in 3u32..60,
        ) {
            let text = format!(
                "update = {update};\nnewplane = {newplane};\nwidth = {width};\nheight = {height};\n\
                 exit: (0 1 a) ({} 1 d);",
                width - 1
            );
            let first = parse(&text);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, parse(&text));
        }

        #[test]
        fn prop_any_scalar_redefinition_is_rejected(value in 3u32..100, index in 0usize..4) {
            let field = ["update", "newplane", "width", "height"][index];
            let text = format!("{field} = {value};\n{field} = {value};");
            prop_assert_eq!(parse(&text), Err(LevelError::Redefinition { field }));
        }
    }
}
