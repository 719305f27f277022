//! Service discards the query failure and returns a new one.

fn main() -> anyhow::Result<()> {
    errtrail::run(errtrail::Variant::Replace)
}
