//! The skin investment advisor: four inputs, one output and twenty rules.

use fuzzy_control::dsl::is;
use fuzzy_control::{trapezoidal, triangular, ControlSystem, Inputs, LinguisticVariable};
use tracing_subscriber::EnvFilter;

const OUTPUT: &str = "Investment potential";

fn build_system() -> fuzzy_control::Result<ControlSystem> {
    // RUST_LOG=fuzzy_control=debug shows the pipeline stages
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut system = ControlSystem::new();

    system.add_input_variable(
        LinguisticVariable::new("Wear", 0., 1., 10000)?
            .with_term("Factory New", triangular(0., 0.01, 0.07))
            .with_term("Minimal Wear", trapezoidal(0.06, 0.08, 0.10, 0.15))
            .with_term("Field-Tested", trapezoidal(0.12, 0.15, 0.30, 0.38))
            .with_term("Well-Worn", trapezoidal(0.35, 0.38, 0.40, 0.45))
            .with_term("Battle-Scarred", triangular(0.40, 0.45, 1.)),
    );
    system.add_input_variable(
        LinguisticVariable::new("Liquidity", 0., 1000., 1000)?
            .with_term("Very Low", triangular(0., 10., 50.))
            .with_term("Low", trapezoidal(30., 100., 150., 300.))
            .with_term("Medium", trapezoidal(200., 300., 400., 600.))
            .with_term("High", trapezoidal(500., 600., 700., 900.))
            .with_term("Very High", triangular(800., 900., 1000.)),
    );
    system.add_input_variable(
        LinguisticVariable::new("Price", 0., 15000., 150000)?
            .with_term("Very Low", triangular(0., 0.5, 3.))
            .with_term("Low", trapezoidal(1., 21., 30., 70.))
            .with_term("Medium", trapezoidal(50., 100., 150., 300.))
            .with_term("High", trapezoidal(250., 400., 800., 1500.))
            .with_term("Very High", triangular(1000., 1500., 15000.)),
    );

    let max_days = 15. * 365.;

    system.add_input_variable(
        LinguisticVariable::new("Age", 0., max_days, 1000)?
            .with_term("New", triangular(0., 30., 180.))
            .with_term("Modern", trapezoidal(120., 365., 730., 1095.))
            .with_term("Middle", trapezoidal(730., 1095., 2190., 2920.))
            .with_term("Old", trapezoidal(2190., 2920., 3650., 4380.))
            .with_term("Vintage", triangular(3650., 4380., max_days)),
    );
    system.add_output_variable(
        LinguisticVariable::new(OUTPUT, 0., 1., 1000)?
            .with_term("Very Low", triangular(0., 0.1, 0.3))
            .with_term("Low", trapezoidal(0.2, 0.4, 0.5, 0.6))
            .with_term("Medium", trapezoidal(0.5, 0.6, 0.7, 0.8))
            .with_term("High", trapezoidal(0.7, 0.8, 0.9, 1.))
            .with_term("Very High", triangular(0.85, 0.95, 1.)),
    );

    let rules = [
        is("Wear", "Factory New")
            .and("Liquidity", "Very High")
            .and("Price", "Very High")
            .and("Age", "New")
            .then(OUTPUT, "Very High"),
        is("Wear", "Factory New")
            .and("Liquidity", "High")
            .and("Price", "High")
            .then(OUTPUT, "High"),
        is("Wear", "Minimal Wear")
            .and("Liquidity", "Very High")
            .and("Price", "High")
            .then(OUTPUT, "High"),
        is("Age", "Vintage")
            .and("Price", "Very High")
            .and("Liquidity", "Medium")
            .then(OUTPUT, "Very High"),
        is("Wear", "Field-Tested")
            .and("Liquidity", "Medium")
            .and("Price", "Medium")
            .then(OUTPUT, "Medium"),
        is("Wear", "Factory New")
            .and("Liquidity", "Medium")
            .and("Price", "Medium")
            .then(OUTPUT, "Medium"),
        is("Age", "Middle")
            .and("Price", "Medium")
            .and("Liquidity", "Medium")
            .then(OUTPUT, "Medium"),
        is("Price", "Low").and("Liquidity", "High").then(OUTPUT, "High"),
        is("Price", "Low").and("Liquidity", "Medium").then(OUTPUT, "Medium"),
        is("Price", "Very Low").and("Liquidity", "High").then(OUTPUT, "Medium"),
        is("Wear", "Well-Worn")
            .and("Price", "High")
            .and("Liquidity", "Low")
            .then(OUTPUT, "Low"),
        is("Wear", "Battle-Scarred")
            .and("Price", "Very High")
            .and("Liquidity", "Very Low")
            .then(OUTPUT, "Very Low"),
        is("Age", "Old").and("Price", "High").then(OUTPUT, "High"),
        is("Age", "Old").and("Liquidity", "Low").then(OUTPUT, "Medium"),
        is("Age", "Vintage").and("Wear", "Factory New").then(OUTPUT, "Very High"),
        is("Liquidity", "Very Low").then(OUTPUT, "Very Low"),
        is("Price", "Very Low").and("Liquidity", "Low").then(OUTPUT, "Low"),
        is("Wear", "Battle-Scarred").and("Liquidity", "Medium").then(OUTPUT, "Low"),
        is("Wear", "Factory New").and("Price", "Low").then(OUTPUT, "High"),
        is("Price", "Very High").and("Liquidity", "Very High").then(OUTPUT, "Very High"),
    ];

    for rule in rules {
        system.add_rule(rule);
    }

    Ok(system)
}

struct Skin {
    name: &'static str,
    wear: f64,
    liquidity: f64,
    price: f64,
    age_days: f64,
}

const SKINS: [Skin; 5] = [
    Skin { name: "AK-47 | Redline", wear: 0.156, liquidity: 127., price: 32.99, age_days: 4302. },
    Skin { name: "AWP | Dragon Lore", wear: 0.035, liquidity: 1., price: 11850., age_days: 4171. },
    Skin { name: "M4A1-S | Hyper Beast", wear: 0.366, liquidity: 30., price: 128.75, age_days: 3883. },
    Skin { name: "Karambit | Fade", wear: 0.0102, liquidity: 5., price: 2350., age_days: 4492. },
    Skin { name: "Sport Gloves | Vice", wear: 0.09, liquidity: 3., price: 2400., age_days: 2846. },
];

fn inputs(skin: &Skin, age_key: &str) -> Inputs {
    Inputs::new()
        .with("Wear", skin.wear)
        .with("Liquidity", skin.liquidity)
        .with("Price", skin.price)
        .with(age_key, skin.age_days)
}

#[test]
fn test_skin_valuations() {
    let system = build_system().unwrap();
    let expected = [
        0.650065897583135,
        0.6841674461447614,
        0.13896332943951992,
        0.45408029338158534,
        0.1430147816702439,
    ];

    for (skin, expected) in SKINS.iter().zip(expected) {
        let outputs = system.infer(&inputs(skin, "Age"), OUTPUT, 100).unwrap();

        assert!(
            (outputs.crisp() - expected).abs() < 1e-9,
            "{}: {} != {}",
            skin.name,
            outputs.crisp(),
            expected
        );
        assert!(!outputs.is_fallback());
    }
}

#[test]
fn test_misnamed_input_is_ignored() {
    let system = build_system().unwrap();
    let redline = &SKINS[0];

    // Without the age the Redline matches no rule at all
    let outputs = system.infer(&inputs(redline, "SkinAge"), OUTPUT, 100).unwrap();

    assert!(outputs.is_fallback());
    assert_eq!(outputs.crisp(), 0.5);

    // The Dragon Lore still fires its liquidity rule
    let outputs = system.infer(&inputs(&SKINS[1], "SkinAge"), OUTPUT, 100).unwrap();

    assert!((outputs.crisp() - 0.1476165160375686).abs() < 1e-9);
}

#[test]
fn test_linguistic_interpretation() {
    let system = build_system().unwrap();
    let output = system.output_variable(OUTPUT).unwrap();
    let fade = system.infer(&inputs(&SKINS[3], "Age"), OUTPUT, 100).unwrap();

    // 0.454 sits on the Low plateau
    let interpretation = output.interpret(fade.crisp(), 0.01);

    assert_eq!(interpretation, vec![("Low", 1.)]);
}

#[test]
fn test_fuzzified_inputs() {
    let system = build_system().unwrap();
    let fuzzified = system.fuzzify(&inputs(&SKINS[0], "Age"));

    assert_eq!(fuzzified.len(), 4);
    assert_eq!(fuzzified["Liquidity"]["Low"], 1.);
    assert!((fuzzified["Price"]["Low"] - (70. - 32.99) / 40.).abs() < 1e-12);
    assert!((fuzzified["Wear"]["Field-Tested"] - 1.).abs() < 1e-12);
    assert_eq!(system.rule_base().len(), 20);
}
