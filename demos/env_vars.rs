use string_to::{parse_object_keys_sync, StringToError, Value};

fn main() {
    let raw: Value = std::env::vars().collect();
    let typed = parse_object_keys_sync(&raw, None);

    match typed.to_json() {
        Ok(json_output) => {
            println!("Environment with typed values:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to render environment: {:?}", miette::Report::new(StringToError::from(e)));
        }
    }
}
