//! Console walkthrough of the showroom domain crates.
//!
//! The scenario is fixed: two smartphones exercised through their call,
//! drain and charge operations, then the vehicle fleet dispatched in order.
//! `run` writes to any `Write` so tests can capture the exact transcript;
//! the binary points it at stdout.

use std::io::{self, Write};

use showroom_core::Entity;
use showroom_devices::Smartphone;
use showroom_vehicles::fleet;

/// Execute the full demo scenario against `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "== Smartphones: inheritance & encapsulation ==")?;

    let mut phone1 = Smartphone::new("Apple", "iPhone 14", 256, 80);
    let mut phone2 = Smartphone::new("Samsung", "Galaxy S22", 128, 55);
    tracing::debug!(id = %phone1.id(), "constructed phone 1");
    tracing::debug!(id = %phone2.id(), "constructed phone 2");

    writeln!(out, "{phone1}")?;
    writeln!(out, "{}", phone1.call("123-456-7890"))?;
    writeln!(out, "{}", phone1.use_for(30))?;
    writeln!(out, "{}", phone1.charge(15))?;
    writeln!(out, "{phone1}")?;

    writeln!(out, "{phone2}")?;
    writeln!(out, "{}", phone2.use_for(8))?;
    writeln!(out, "{phone2}")?;

    writeln!(out)?;
    writeln!(out, "== Vehicles: polymorphic dispatch ==")?;
    for vehicle in fleet() {
        writeln!(out, "{}", vehicle.travel())?;
    }

    Ok(())
}
