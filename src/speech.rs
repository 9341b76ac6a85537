use url::form_urlencoded;

/// Text-to-speech endpoint serving `audio/mpeg`
pub const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Build the text-to-speech URL speaking `text` in `language`
///
/// Produces `TTS_ENDPOINT?ie=UTF-8&q=<text>&tl=<language>&client=tw-ob`.
pub fn speech_url(text: &str, language: &str) -> String {
    format!(
        "{}?ie=UTF-8&q={}&tl={}&client=tw-ob",
        TTS_ENDPOINT,
        query_escape(text),
        query_escape(language)
    )
}

/// Escape a query value, leaving only alphanumerics and `-_.~` bare and
/// turning spaces into `+`
fn query_escape(value: &str) -> String {
    // form encoding keeps `*` bare and escapes `~`
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
        .replace("%7E", "~")
}
