use ipwhois_rs::{get_ip_info, get_my_ip_info, ipwhois, IpWhoisError, LookupOptions};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

async fn run() -> Result<(), IpWhoisError> {
    println!("1. Getting info for your current IP...");
    let mine = get_my_ip_info(None).await?;
    println!("   IP: {}", mine.ip);
    println!("   Country: {} ({})", mine.country, mine.country_code);
    println!("   City: {}", mine.city);
    println!("   ISP: {}", mine.isp);
    println!("   Timezone: {}\n", mine.timezone);

    println!("2. Getting info for Google DNS (8.8.8.8)...");
    let google = get_ip_info("8.8.8.8", None).await?;
    println!("   IP: {}", google.ip);
    println!("   Country: {} ({})", google.country, google.country_code);
    println!("   City: {}", google.city);
    println!("   Organization: {}", google.org);
    println!("   Timezone: {}\n", google.timezone);

    println!("3. Getting info for Cloudflare DNS (1.1.1.1)...");
    let cloudflare = ipwhois(Some(LookupOptions::new().ip("1.1.1.1").timeout_ms(5000))).await?;
    println!("   IP: {}", cloudflare.ip);
    println!("   Country: {} ({})", cloudflare.country, cloudflare.country_code);
    println!("   City: {}", cloudflare.city);
    println!("   Latitude: {}", cloudflare.latitude);
    println!("   Longitude: {}", cloudflare.longitude);

    Ok(())
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    match run().await {
        Ok(()) => println!("\nAll lookups completed."),
        Err(err) => eprintln!("Error ({:?}): {}", err.kind(), err),
    }
}
