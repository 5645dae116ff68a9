//! Interactive terminal menu for the manager

use std::io::{self, BufRead, Write};

use super::Manager;
use crate::protocol::{STANDARD_OIDS, oid_name};

/// Run the menu loop until the user exits or input ends.
///
/// `1` lists OIDs, `2` GETs one, `3` exits.
pub fn run_menu<R, W>(
    manager: &Manager,
    host: &str,
    port: u16,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "******* Simple SNMPv1-style SNMP Manager *******")?;
        writeln!(output, "1) Show available OIDs")?;
        writeln!(output, "2) GET value by OID")?;
        writeln!(output, "3) Exit")?;
        let Some(choice) = prompt(&mut input, &mut output, "Select an option (1-3): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => print_oids(&mut output)?,
            "2" => {
                let Some(oid) = prompt(&mut input, &mut output, "Enter OID (e.g., 1, 2, 3): ")?
                else {
                    break;
                };
                if oid.is_empty() {
                    writeln!(output, "OID cannot be empty.\n")?;
                    continue;
                }

                writeln!(output, "\nSending SNMP GET request for OID {oid}...")?;
                match manager.send_get_request(&oid, host, port) {
                    Ok(value) => {
                        let name = oid_name(&oid).unwrap_or("Unknown OID");
                        writeln!(output, "RESPONSE: {name} (OID {oid}) = {value}\n")?;
                    }
                    Err(err) => writeln!(output, "ERROR: {err}\n")?,
                }
            }
            "3" => {
                writeln!(output, "Exiting manager.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please select 1, 2, or 3.\n")?,
        }
    }

    writeln!(output)?;
    writeln!(output, "Exiting manager.")
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_oids<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nAvailable OIDs:")?;
    for (oid, name) in STANDARD_OIDS {
        writeln!(output, "  {oid} : {name}")?;
    }
    writeln!(output)
}
