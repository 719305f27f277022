//! Service logs the query failure before replacing it; the handler logs again.

fn main() -> anyhow::Result<()> {
    errtrail::run(errtrail::Variant::LogAndReplace)
}
