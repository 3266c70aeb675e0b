use conduit::control;
use std::error::Error;

/// Entry point that starts the control loop.
fn main() -> Result<(), Box<dyn Error>> {
    control::control_loop()
}
