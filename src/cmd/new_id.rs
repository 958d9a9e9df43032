use zeka::error::Result;
use zeka::{new_id, Clock, SystemClock};

pub fn run() -> Result<()> {
    println!("{}", new_id(&SystemClock.now()));
    Ok(())
}
