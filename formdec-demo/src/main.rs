//! Decode `key=value` pairs from the command line into a typed record.
//!
//!     formdec-demo first_name=Batty last_name=Penderwick age=11

use clap::Parser;
use formdec::{
    Decoder, Field, FormData, FormRecord, SetterError, Slot, UnknownKeys, ValidationError,
};

#[derive(Parser)]
#[command(about = "Decode key=value form pairs into a Person record")]
struct Args {
    /// Form pairs, e.g. `first_name=Batty age=11`. Repeat a key to submit
    /// several values under it.
    #[arg(value_name = "KEY=VALUE")]
    pairs: Vec<String>,

    /// Fail on keys that match no field instead of warning about them.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Default)]
struct Person {
    first_name: String,
    last_name: String,
    age: i64,
    nicknames: Vec<String>,
}

fn validate_age(_: &Person, values: &[String]) -> Option<ValidationError> {
    match values.first().map(|v| v.parse::<i64>()) {
        None | Some(Ok(_)) => None,
        Some(Err(_)) => Some(ValidationError::new("age", "age must be a whole number")),
    }
}

fn set_last_name(person: &mut Person, values: &[String]) -> Result<(), SetterError> {
    let Some(name) = values.first() else {
        return Err("last_name submitted without a value".into());
    };
    // Demonstrates a setter: normalize capitalization instead of taking the
    // value verbatim.
    let mut chars = name.chars();
    person.last_name = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    Ok(())
}

impl FormRecord for Person {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new("FirstName", "first_name", |p| Slot::Text(&mut p.first_name)),
            Field::new("LastName", "last_name", |p: &mut Person| {
                Slot::Text(&mut p.last_name)
            })
                .setter(set_last_name),
            Field::new("Age", "age", |p: &mut Person| Slot::Int(&mut p.age)).validator(validate_age),
            Field::new("Nicknames", "nickname", |p| Slot::TextList(&mut p.nicknames)),
        ]
    }
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut data = FormData::new();
    for pair in &args.pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got {pair:?}"))?;
        data.entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    if data.is_empty() {
        for (key, value) in [
            ("first_name", "Batty"),
            ("last_name", "penderwick"),
            ("age", "11"),
        ] {
            data.insert(key.to_string(), vec![value.to_string()]);
        }
    }

    let decoder = Decoder::new().unknown_keys(if args.strict {
        UnknownKeys::Deny
    } else {
        UnknownKeys::Warn
    });

    let mut person = Person::default();
    if let Err(err) = decoder.unmarshal(&data, &mut person) {
        // Validation failures are expected user errors: report all of them
        // as JSON and exit cleanly. Anything else is fatal.
        if let Some(compound) = err.validation_errors() {
            eprintln!("{}", serde_json::to_string_pretty(compound.errors())?);
            std::process::exit(1);
        }
        return Err(err.into());
    }

    print!(
        "{} {} is {} years old",
        person.first_name, person.last_name, person.age
    );
    if person.nicknames.is_empty() {
        println!();
    } else {
        println!(" (aka {})", person.nicknames.join(", "));
    }
    Ok(())
}
