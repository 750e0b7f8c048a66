use clap::Parser;
use mbr_nostd::{MasterBootRecord, PartitionTable};
use size::Size;
use spidev::SpidevOptions;

use diskio::{delay, Disk, Ioctl};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Specify SPI device
    #[clap(short, long, value_parser)]
    spi: String,

    /// Specify chip-select GPIO number
    #[clap(short, long, value_parser)]
    cs: u16,
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let bus = diskio::bus::linux::spi(&args.spi, args.cs).map_err(|e| e.to_string())?;
    let mut disk = Disk::new(bus, 0);
    let card = disk.initialize(delay::std::Delay).map_err(|e| format!("{:?}", e))?;
    println!("Card: {:?}", card);

    let mut sectors = 0u64;
    disk.control(Ioctl::SectorCount(&mut sectors)).map_err(|e| format!("{:?}", e))?;
    println!("Capacity: {}", Size::from_bytes(sectors * diskio::BLOCK_SIZE as u64));

    let options = SpidevOptions { max_speed_hz: Some(2_000_000), ..Default::default() };
    disk.transport(|bus| bus.spi(|spi| spi.0.configure(&options)))
        .map_err(|e| e.to_string())?;

    let mut buffer = [0u8; 512];
    disk.read(0, &mut buffer).map_err(|e| format!("{:?}", e))?;
    let mbr = MasterBootRecord::from_bytes(&buffer).map_err(|e| format!("{:?}", e))?;
    for partition in mbr.partition_table_entries().iter() {
        println!("{:?}", partition);
    }
    disk.control(Ioctl::Sync).map_err(|e| format!("{:?}", e))
}

fn main() {
    env_logger::init();
    match run() {
        Ok(_) => (),
        Err(e) => println!("{}", e),
    };
}
