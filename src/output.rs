use crate::api::DnsRecord;
use crate::hook::Stage;
use std::io::{self, Write};

pub fn write_stage(out: &mut impl Write, stage: Stage, domain: &str, token: &str) -> io::Result<()> {
    writeln!(out, "{:<20}{:<32}{}", "Stage", "Domain", "Challenge")?;
    writeln!(out, "{:<20}{:<32}{}", "-----", "------", "---------")?;
    writeln!(out, "{:<20}{:<32}{}", stage, domain, token)
}

pub fn write_records(out: &mut impl Write, records: &[DnsRecord]) -> io::Result<()> {
    writeln!(out, "{:<12}{:<8}{:<32}{}", "ID", "Type", "Subdomain", "Content")?;
    writeln!(out, "{:<12}{:<8}{:<32}{}", "--", "----", "---------", "-------")?;
    for record in records {
        writeln!(
            out,
            "{:<12}{:<8}{:<32}{}",
            record.id, record.record_type, record.subdomain, record.content
        )?;
    }
    Ok(())
}
