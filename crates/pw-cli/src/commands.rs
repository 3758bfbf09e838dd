use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use pw_cli::fixture::FormFixture;
use pw_page::{EventScript, Page, PageConfig, demo};
use pw_validate::{Issue, RuleSet};

use crate::cli::{SimulateArgs, ValidateArgs};
use crate::summary::apply_table_style;
use crate::types::{SimulationRun, ValidationRun};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let span = info_span!("validate", fixture = %args.fixture.display());
    let _guard = span.enter();

    let fixture = FormFixture::load(&args.fixture)?;
    let report = fixture.validate();
    info!(
        fields = report.len(),
        invalid = report.invalid_count(),
        "validation complete"
    );
    Ok(ValidationRun {
        source: args.fixture.clone(),
        fields: fixture.fields,
        report,
    })
}

pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Applies to", "Requirement", "Issue"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "0".to_string(),
        "Required".to_string(),
        "required fields".to_string(),
        "non-empty after trimming".to_string(),
        Issue::Required.code().to_string(),
    ]);
    for (index, rule) in RuleSet::standard().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            rule.label().to_string(),
            rule.selects().to_string(),
            rule.description().to_string(),
            rule.issue().code().to_string(),
        ]);
    }
    println!("{table}");
    println!("Empty optional fields pass. The first rule that rejects a value decides.");
}

pub fn run_simulate(args: &SimulateArgs) -> Result<SimulationRun> {
    let span = info_span!("simulate");
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => PageConfig::load(path).context("load page configuration")?,
        None => PageConfig::default(),
    };
    let script = match &args.script {
        Some(path) => EventScript::load(path).context("load event script")?,
        None => EventScript::default(),
    };

    let doc = demo::landing_page().context("build demo page")?;
    let mut page = Page::with_config(doc, config);
    page.start().context("start page controllers")?;
    script.run(&mut page).context("replay event script")?;

    info!(steps = script.len(), now = page.now(), "simulation complete");
    Ok(SimulationRun {
        steps: script.len(),
        snapshot: page.snapshot(),
    })
}
