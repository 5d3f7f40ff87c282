use approx::assert_abs_diff_eq;
use dfn_format::{
    format_fracture_report, format_trace_list, load_fractures, parse_fractures, report_to_json,
    write_fracture_report, write_trace_list, LoadError,
};
use dfn_kernel::geometry::point::Point3d;
use dfn_kernel::{compute_intersections, sort_traces, FractureError, IntersectionConfig, Trace, TraceKind};

// ── Fixtures ─────────────────────────────────────────────────────────────

const FR3: &str = "\
# Number of Fractures
3
# FractureId; NumVertices
0; 4
# Vertices
0.0000000000000000e+00; 1.0000000000000000e+00; 1.0000000000000000e+00; 0.0000000000000000e+00
0.0000000000000000e+00; 0.0000000000000000e+00; 1.0000000000000000e+00; 1.0000000000000000e+00
0.0000000000000000e+00; 0.0000000000000000e+00; 0.0000000000000000e+00; 0.0000000000000000e+00
# FractureId; NumVertices
1; 4
# Vertices
8.0000000000000004e-01; 8.0000000000000004e-01; 8.0000000000000004e-01; 8.0000000000000004e-01
0.0000000000000000e+00; 0.0000000000000000e+00; 1.0000000000000000e+00; 1.0000000000000000e+00
-1.0000000000000001e-01; 2.9999999999999999e-01; 2.9999999999999999e-01; -1.0000000000000001e-01
# FractureId; NumVertices
2; 4
# Vertices
-2.3777799999999999e-01; 3.1618370000000001e-01; 3.1618370000000001e-01; -2.3777799999999999e-01
5.0000000000000000e-01; 5.0000000000000000e-01; 5.0000000000000000e-01; 5.0000000000000000e-01
-3.4444000000000002e-01; -3.4444000000000002e-01; 4.5283889999999999e-01; 4.5283889999999999e-01
";

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("dfn-format-{}-{}", std::process::id(), name))
}

// ── Import ───────────────────────────────────────────────────────────────

#[test]
fn test_parse_fr3() {
    let set = parse_fractures(FR3).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.ids().collect::<Vec<_>>(), vec![0, 1, 2]);

    let f1 = set.get(1).unwrap();
    assert_eq!(f1.vertex_count(), 4);
    assert_abs_diff_eq!(f1.vertices()[1], Point3d::new(0.8, 0.0, 0.3), epsilon = 1e-15);

    let f2 = set.get(2).unwrap();
    assert_abs_diff_eq!(
        f2.vertices()[2],
        Point3d::new(0.3161837, 0.5, 0.4528389),
        epsilon = 1e-15
    );
    assert!(set.traces().is_empty());
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let text = "\n# header\n\n1\n\n# a triangle\n7;3\n0;1;0\n\n0;0;1\n0;0;0\n";
    let set = parse_fractures(text).unwrap();
    assert_eq!(set.ids().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn test_extra_row_values_ignored() {
    let text = "1\n0; 3\n0; 1; 0; 9\n0; 0; 1; 9\n0; 0; 0; 9\n";
    let set = parse_fractures(text).unwrap();
    assert_eq!(set.get(0).unwrap().vertex_count(), 3);
}

#[test]
fn test_missing_count() {
    assert!(matches!(parse_fractures("# nothing\n\n"), Err(LoadError::MissingCount)));
}

#[test]
fn test_invalid_count() {
    let err = parse_fractures("# count\nthree\n").unwrap_err();
    match err {
        LoadError::InvalidCount { line, value } => {
            assert_eq!(line, 2);
            assert_eq!(value, "three");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_fractures() {
    assert!(matches!(parse_fractures("0\n"), Err(LoadError::NoFractures)));
}

#[test]
fn test_malformed_header() {
    let err = parse_fractures("1\n0, 3\n0;1;0\n0;0;1\n0;0;0\n").unwrap_err();
    assert!(matches!(err, LoadError::MalformedHeader { line: 2, .. }));
}

#[test]
fn test_short_vertex_row() {
    let err = parse_fractures("1\n0; 3\n0;1\n0;0;1\n0;0;0\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::ShortVertexRow {
            line: 3,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn test_invalid_coordinate() {
    let err = parse_fractures("1\n0; 3\n0;1;0\n0;x;1\n0;0;0\n").unwrap_err();
    match err {
        LoadError::InvalidCoordinate { line, value } => {
            assert_eq!(line, 4);
            assert_eq!(value, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unexpected_eof() {
    let err = parse_fractures("1\n4; 3\n0;1;0\n0;0;1\n").unwrap_err();
    assert!(matches!(err, LoadError::UnexpectedEof { fracture: 4 }));
}

#[test]
fn test_count_mismatch() {
    let err = parse_fractures("2\n0; 3\n0;1;0\n0;0;1\n0;0;0\n").unwrap_err();
    assert!(matches!(err, LoadError::CountMismatch { declared: 2, found: 1 }));
}

#[test]
fn test_duplicate_id_rejected() {
    let block = "5; 3\n0;1;0\n0;0;1\n0;0;0\n";
    let err = parse_fractures(&format!("2\n{block}{block}")).unwrap_err();
    assert!(matches!(err, LoadError::Fracture(FractureError::DuplicateId(5))));
}

#[test]
fn test_too_few_vertices_rejected() {
    let err = parse_fractures("1\n0; 2\n0;1\n0;0\n0;0\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Fracture(FractureError::TooFewVertices { id: 0, count: 2 })
    ));
}

#[test]
fn test_load_missing_file() {
    let err = load_fractures(temp_path("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist"));
}

// ── Reports ──────────────────────────────────────────────────────────────

#[test]
fn test_trace_list_layout() {
    let mut set = parse_fractures(FR3).unwrap();
    compute_intersections(&mut set, IntersectionConfig::default());
    let text = format_trace_list(set.traces());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "# Number of Traces");
    assert_eq!(lines[1], "2");
    assert_eq!(lines[2], "# TraceId; FractureId1; FractureId2; X1; Y1; Z1; X2; Y2; Z2");
    assert_eq!(lines.len(), 5);

    let fields: Vec<&str> = lines[3].split("; ").collect();
    assert_eq!(&fields[..3], &["0", "0", "1"]);
    let coords: Vec<f64> = fields[3..].iter().map(|v| v.parse().unwrap()).collect();
    assert_abs_diff_eq!(coords[0], 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(coords[4], 1.0, epsilon = 1e-12);
}

#[test]
fn test_fracture_report_layout() {
    let mut set = parse_fractures(FR3).unwrap();
    compute_intersections(&mut set, IntersectionConfig::default());
    sort_traces(set.traces_mut());
    let text = format_fracture_report(set.traces());
    let lines: Vec<&str> = text.lines().collect();

    // Fracture 0: the passing trace to 1 comes before the tip to 2.
    assert_eq!(lines[0], "# FractureId; NumTraces");
    assert_eq!(lines[1], "0; 2");
    assert_eq!(lines[2], "# TraceId; Tips; Length");
    assert!(lines[3].starts_with("0; false; "));
    assert!(lines[4].starts_with("1; true; "));
    let length: f64 = lines[3].rsplit("; ").next().unwrap().parse().unwrap();
    assert_abs_diff_eq!(length, 1.0, epsilon = 1e-12);

    assert_eq!(lines[6], "1; 1");
    assert!(lines[8].starts_with("0; false; "));
    assert_eq!(lines[10], "2; 1");
    assert!(lines[12].starts_with("1; true; "));
    assert_eq!(lines.len(), 13);
}

#[test]
fn test_reports_are_exact_text() {
    let trace = Trace::new(
        4,
        (2, 7),
        (Point3d::new(0.0, 0.0, 0.0), Point3d::new(3.0, 4.0, 0.0)),
        (TraceKind::Tip, TraceKind::Passing),
    );

    assert_eq!(
        format_trace_list(&[trace]),
        "# Number of Traces\n1\n# TraceId; FractureId1; FractureId2; X1; Y1; Z1; X2; Y2; Z2\n\
         4; 2; 7; 0.0000000000000000e0; 0.0000000000000000e0; 0.0000000000000000e0; \
         3.0000000000000000e0; 4.0000000000000000e0; 0.0000000000000000e0\n"
    );
    assert_eq!(
        format_fracture_report(&[trace]),
        "# FractureId; NumTraces\n2; 1\n# TraceId; Tips; Length\n4; true; 5.0000000000000000e0\n\
         # FractureId; NumTraces\n7; 1\n# TraceId; Tips; Length\n4; false; 5.0000000000000000e0\n"
    );
    assert_eq!(format_trace_list(&[]), "# Number of Traces\n0\n# TraceId; FractureId1; FractureId2; X1; Y1; Z1; X2; Y2; Z2\n");
    assert!(format_fracture_report(&[]).is_empty());
}

#[test]
fn test_json_report() {
    let mut set = parse_fractures(FR3).unwrap();
    let intersections = compute_intersections(&mut set, IntersectionConfig::default());
    let json = report_to_json(&set, &intersections).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["fractures"], 3);
    assert_eq!(value["adjacency"]["0"], serde_json::json!([1, 2]));
    assert_eq!(value["traces"].as_array().unwrap().len(), 2);
    assert_eq!(value["traces"][1]["second_kind"], "tip");
    assert!(value["degenerate"].as_array().unwrap().is_empty());
}

#[test]
fn test_writers_create_files() {
    let mut set = parse_fractures(FR3).unwrap();
    compute_intersections(&mut set, IntersectionConfig::default());

    let traces_path = temp_path("traces.txt");
    let report_path = temp_path("fractures.txt");
    write_trace_list(&traces_path, set.traces()).unwrap();
    write_fracture_report(&report_path, set.traces()).unwrap();

    assert_eq!(std::fs::read_to_string(&traces_path).unwrap(), format_trace_list(set.traces()));
    assert_eq!(
        std::fs::read_to_string(&report_path).unwrap(),
        format_fracture_report(set.traces())
    );
    let _ = std::fs::remove_file(traces_path);
    let _ = std::fs::remove_file(report_path);
}
