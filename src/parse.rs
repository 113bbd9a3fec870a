use clap::Parser;

#[derive(Parser)]
#[command(name = "wow-observations")]
#[command(about = "A CLI tool for fetching Wild Orchid Watch observation records")]
#[command(version = "1.0")]
pub(crate) struct Args {
    /// Records requested per page
    #[arg(short, long, default_value = "3")]
    pub page_size: u32,

    /// Hard cap on the number of pages fetched
    #[arg(short, long, default_value = "3")]
    pub max_pages: u32,

    /// Base URL of the observation facade
    #[arg(short, long, default_value = "https://api-facade.wildorchidwatch.org")]
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["wow-observations"]).unwrap();
        assert_eq!(args.page_size, 3);
        assert_eq!(args.max_pages, 3);
        assert_eq!(args.base_url, "https://api-facade.wildorchidwatch.org");
    }

    #[test]
    fn test_override_pagination() {
        let args =
            Args::try_parse_from(["wow-observations", "--page-size", "10", "--max-pages", "5"])
                .unwrap();
        assert_eq!(args.page_size, 10);
        assert_eq!(args.max_pages, 5);
    }
}
