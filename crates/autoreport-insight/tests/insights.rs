use autoreport_insight::{MAX_INSIGHTS, RULES, generate, generate_with};
use autoreport_model::{
    AnalysisRecord, Column, ColumnKind, CorrelationMatrix, CorrelationPair, DocumentSummary,
    Insight, Overview, Table, Value,
};
use autoreport_profile::{profile_table, profile_text};

fn empty_record() -> AnalysisRecord {
    AnalysisRecord {
        file: DocumentSummary::default(),
        generated: "2026-01-01 00:00:00".to_string(),
        overview: None,
        profiles: Vec::new(),
        correlations: None,
        missing: Vec::new(),
        text_stats: None,
        insights: Vec::new(),
    }
}

fn table_record(table: &Table) -> AnalysisRecord {
    let profile = profile_table(table);
    AnalysisRecord {
        overview: Some(profile.overview),
        profiles: profile.columns,
        correlations: profile.correlations,
        missing: profile.missing,
        ..empty_record()
    }
}

fn categories(insights: &[Insight]) -> Vec<&str> {
    insights.iter().map(|i| i.category.as_str()).collect()
}

#[test]
fn dominant_category() {
    let table = Table::from_columns(vec![Column::new(
        "grade",
        ColumnKind::Text,
        ["A", "A", "A", "A", "B"].into_iter().map(Value::from).collect(),
    )]);
    let insights = generate(&table_record(&table));
    assert_eq!(categories(&insights), vec!["Small Sample", "Dominant Category"]);
    assert_eq!(insights[1].message, "'A' dominates 'grade' at 80.0%.");
    assert_eq!(
        insights[0].message,
        "Only 5 rows detected; interpret statistics cautiously."
    );
}

#[test]
fn dataset_level_rules_use_thousands_separators() {
    let record = AnalysisRecord {
        overview: Some(Overview {
            rows: 150_000,
            columns: 2,
            missing_pct: 25.0,
            duplicate_rows: 1_234,
            ..Overview::default()
        }),
        ..empty_record()
    };
    let insights = generate(&record);
    let messages: Vec<&str> = insights.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Dataset has 150,000 rows; well suited for statistical modeling.",
            "25.0% of cells are missing; consider imputation.",
            "1,234 duplicate rows found; deduplication recommended.",
        ]
    );
}

#[test]
fn moderate_missing_data() {
    let record = AnalysisRecord {
        overview: Some(Overview {
            rows: 50,
            missing_pct: 7.3,
            ..Overview::default()
        }),
        ..empty_record()
    };
    let insights = generate(&record);
    assert_eq!(categories(&insights), vec!["Moderate Missing Data"]);
    assert_eq!(insights[0].message, "7.3% missing cells detected.");
}

#[test]
fn only_leading_correlation_pairs_are_checked() {
    let pair = |a: &str, b: &str, r: f64| CorrelationPair {
        col1: a.into(),
        col2: b.into(),
        r,
    };
    let record = AnalysisRecord {
        correlations: Some(CorrelationMatrix {
            columns: vec![],
            values: vec![],
            top_pairs: vec![
                pair("a", "b", 0.95),
                pair("a", "c", -0.9),
                pair("b", "c", 0.5),
                pair("c", "d", 0.45),
            ],
        }),
        ..empty_record()
    };
    let insights = generate(&record);
    assert_eq!(categories(&insights), vec!["Strong Correlation", "Strong Correlation"]);
    assert_eq!(
        insights[1].message,
        "'a' and 'c' are strongly correlated (r=-0.900)."
    );
}

#[test]
fn output_is_capped() {
    let columns = (0..15)
        .map(|i| {
            Column::new(
                format!("x{i}"),
                ColumnKind::Numeric,
                [1.0, 2.0, 3.0, 4.0, 100.0 + f64::from(i)]
                    .into_iter()
                    .map(Value::Number)
                    .collect(),
            )
        })
        .collect();
    let record = table_record(&Table::from_columns(columns));
    let insights = generate(&record);
    assert_eq!(insights.len(), MAX_INSIGHTS);
    assert_eq!(insights[0].category, "Small Sample");
    assert!(insights[1..].iter().all(|i| i.category == "Outliers Detected"));
    assert_eq!(
        insights[1].message,
        "Column 'x0' has 20.0% outliers (IQR method)."
    );
    assert_eq!(generate(&record), insights);
}

#[test]
fn custom_rule_subset_and_cap() {
    let table = Table::from_columns(vec![Column::new(
        "x",
        ColumnKind::Numeric,
        [1.0, 2.0, 3.0, 4.0, 100.0].into_iter().map(Value::Number).collect(),
    )]);
    let record = table_record(&table);
    let skew_only: Vec<_> = RULES.iter().copied().filter(|r| r.name == "skewness").collect();
    let insights = generate_with(&skew_only, &record, 5);
    assert_eq!(
        insights,
        vec![Insight::new(
            "Skewed Distribution",
            "'x' is strongly positively skewed (skewness=2.23)."
        )]
    );
    assert!(generate_with(RULES, &record, 0).is_empty());
}

#[test]
fn empty_record_has_no_insights() {
    assert!(generate(&empty_record()).is_empty());
}

#[test]
fn repetitive_text() {
    let record = AnalysisRecord {
        text_stats: Some(profile_text("spam spam spam spam. spam!")),
        ..empty_record()
    };
    insta::assert_json_snapshot!(generate(&record), @r#"
    [
      {
        "category": "Low Lexical Diversity",
        "message": "Text has low diversity (0.20); possibly repetitive."
      },
      {
        "category": "Document Size",
        "message": "5 words across 2 sentences."
      }
    ]
    "#);
}
