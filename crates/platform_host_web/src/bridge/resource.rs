use platform_host::FetchedResource;

pub(crate) async fn fetch_text(url: &str) -> Result<FetchedResource, String> {
    super::interop::fetch_text(url).await
}
