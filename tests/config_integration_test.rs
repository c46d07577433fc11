use std::io::Write;
use stock_dilution::core::report;
use stock_dilution::core::ConfigProvider;
use stock_dilution::utils::validation::Validate;
use stock_dilution::{
    DilutionCalculator, OutputFormat, ResolvedConfig, StockVolumes, TomlConfig,
};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_end_to_end_with_config_file() {
    let file = write_config(
        r#"
[calculation]
recommended_concentration = 0.32

[output]
format = "json"
"#,
    );

    let toml_config = TomlConfig::from_file(file.path()).unwrap();
    toml_config.validate().unwrap();
    assert_eq!(toml_config.output_format(), Some(OutputFormat::Json));

    let resolved = ResolvedConfig::resolve(None, Some(&toml_config));
    let calculator = DilutionCalculator::from_config(&resolved);
    assert_eq!(calculator.recommended_concentration(), 0.32);

    let plan = calculator.plan(StockVolumes::new(0.01, 0.5, 2.0)).unwrap();
    assert!((plan.solute_mass - 32.16).abs() < 1e-9);

    let json = report::render_json(&plan).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["recommended_concentration"], 0.32);
    assert_eq!(value["volumes"]["stock_container_volume"], 0.5);
}

#[test]
fn test_target_flag_wins_over_file() {
    let file = write_config(
        r#"
[calculation]
recommended_concentration = 0.32
"#,
    );
    let toml_config = TomlConfig::from_file(file.path()).unwrap();

    let resolved = ResolvedConfig::resolve(Some(0.64), Some(&toml_config));
    assert_eq!(resolved.recommended_concentration(), 0.64);
}

#[test]
fn test_default_configuration_text_report() {
    let resolved = ResolvedConfig::resolve(None, None);
    let plan = DilutionCalculator::from_config(&resolved)
        .plan(StockVolumes::new(0.01, 0.5, 2.0))
        .unwrap();

    let text = report::render_text(&plan);
    assert!(text
        .starts_with("You will need to dilute 64.32 grams of solute into 0.5 litres of water."));
    assert!(text.contains("0.01 litres of this solution diluted into a container of 2.0"));
    assert!(text.ends_with("recommended concentration of 0.64 g/L."));
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_config("[calculation]\nrecommended_concentration = \"lots\"\n");
    assert!(TomlConfig::from_file(file.path()).is_err());

    let file = write_config("[calculation]\nrecommended_concentration = 0.0\n");
    let toml_config = TomlConfig::from_file(file.path()).unwrap();
    assert!(toml_config.validate().is_err());
}
