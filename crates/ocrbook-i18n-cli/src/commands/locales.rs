use ocrbook_i18n_core::supported_locales;

use crate::cli::OutputFormat;
use crate::client::CliResult;
use crate::output::render_locales;

pub(crate) fn handle_locales(format: OutputFormat) -> CliResult<()> {
    render_locales(&supported_locales(), format)
}
