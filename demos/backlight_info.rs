//! Print the machine identification and current keyboard backlight colour

use slimbook::{Model, SlimbookError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let info = slimbook::device_info();
    println!("{}", info.to_json()?);

    match slimbook::kbd_backlight_get(Model::UNKNOWN) {
        Ok(color) => println!("keyboard backlight: #{}", color),
        Err(SlimbookError::NotFound(reason)) => println!("no RGB keyboard backlight: {}", reason),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
