use sweepr_common::network::address::format_address;
use sweepr_common::network::cidr::{Cidr, cidr_to_range};

use crate::terminal::print;

const KEY_WIDTH: usize = 9;

/// Prints `{network} - {broadcast}` on stdout, details on stderr.
pub fn calc(cidr: &str) -> anyhow::Result<()> {
    let (network, broadcast) = cidr_to_range(cidr)?;
    let block: Cidr = cidr.parse()?;

    println!("{network} - {broadcast}");

    print::header("cidr block");
    print::aligned_line("Block", &block.to_string(), KEY_WIDTH);
    print::aligned_line("Netmask", &format_address(block.mask()), KEY_WIDTH);
    print::aligned_line("Network", &network, KEY_WIDTH);
    print::aligned_line("Broadcast", &broadcast, KEY_WIDTH);
    print::aligned_line("Addresses", &block.range().len().to_string(), KEY_WIDTH);
    Ok(())
}
