use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const RAJESH: &str = "rSupp1RajeshText123456789Delhi";
pub const KRISHNA: &str = "rSupp2KrishnaFab123456789Chen";
pub const PATEL: &str = "rSupp3PatelCott123456789Ahme";

/// Writes an `action,value` script to `path`.
pub fn write_script(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "value"])?;
    for (action, value) in rows {
        wtr.write_record([*action, *value])?;
    }

    wtr.flush()?;
    Ok(())
}
