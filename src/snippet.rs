//! Snippet offer model and modal state machine
//!
//! Everything the card displays or sends is derived here, free of any UI
//! dependency, so the behavior is unit-testable. The `ui` module only lays
//! these values out.

use crate::analytics::{AnalyticsEvent, AnalyticsHandle, EventProps};
use crate::i18n;
use crate::types::{format_amount, Currency, Lang, LayoutDirection};

/// Number of installments in the offer. Fixed by the product, never
/// configurable.
pub const INSTALLMENTS_COUNT: u32 = 4;

/// Learn-more page endpoints, one per text direction
pub mod base_url {
    pub const EN: &str = "https://checkout.splitpay.me/promos/product-page/installments/en";
    pub const AR: &str = "https://checkout.splitpay.me/promos/product-page/installments/ar";
}

const LEAD_IN_EN: &str = "or 4 interest-free payments of ";
const LEAD_IN_AR: &str = "أو قسّمها على 4 دفعات شهرية بقيمة ";
const LEARN_MORE_EN: &str = "Learn more";
const LEARN_MORE_AR: &str = "لمعرفة المزيد";

/// Style of a single text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Body,
    BodyBold,
    BodyUnderline,
}

/// A styled text segment, consumed by the rich-text renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
}

impl TextRun {
    fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// The installment offer shown by the card, immutable once constructed
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetOffer {
    pub amount: f64,
    pub currency: Currency,
    pub is_privacy_enabled: bool,
    pub prefer_currency_in_arabic: bool,
}

impl SnippetOffer {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            is_privacy_enabled: false,
            prefer_currency_in_arabic: false,
        }
    }

    /// Language of the learn-more page
    pub fn page_lang(&self, direction: LayoutDirection) -> Lang {
        direction.page_lang()
    }

    /// Full learn-more URL for this offer
    ///
    /// Privacy mode omits the price and forces `installmentsCount=0` so the
    /// page never sees the basket amount.
    pub fn page_url(&self, direction: LayoutDirection) -> String {
        let base = if direction.is_rtl() {
            base_url::AR
        } else {
            base_url::EN
        };
        if self.is_privacy_enabled {
            format!(
                "{base}?currency={}&source=sdk&installmentsCount=0",
                self.currency.code()
            )
        } else {
            format!(
                "{base}?price={}&currency={}&source=sdk",
                query_amount(self.amount),
                self.currency.code()
            )
        }
    }

    /// Per-installment amount
    pub fn installment_amount(&self) -> f64 {
        self.amount / INSTALLMENTS_COUNT as f64
    }

    /// Currency label for display
    ///
    /// Arabic script only when the host prefers it and the layout is RTL.
    pub fn currency_label(&self, direction: LayoutDirection) -> &'static str {
        let script = if self.prefer_currency_in_arabic && direction.is_rtl() {
            Some(Lang::Ar)
        } else {
            None
        };
        self.currency.label(script)
    }

    /// The card's text, as ordered styled segments
    pub fn text_runs(&self, direction: LayoutDirection) -> Vec<TextRun> {
        let lang = self.page_lang(direction);
        let (lead_in, learn_more) = if direction.is_rtl() {
            (LEAD_IN_AR, LEARN_MORE_AR)
        } else {
            (LEAD_IN_EN, LEARN_MORE_EN)
        };

        let amount_text = if self.is_privacy_enabled {
            String::new()
        } else {
            format_amount(self.installment_amount())
        };
        let amount_segment = i18n::render(
            i18n::localized(lang, i18n::SNIPPET_AMOUNT),
            &[amount_text.as_str(), self.currency_label(direction)],
        );
        let title2 = i18n::localized(lang, i18n::SNIPPET_TITLE2);

        vec![
            TextRun::new(lead_in, RunStyle::Body),
            TextRun::new(amount_segment, RunStyle::BodyBold),
            TextRun::new(title2, RunStyle::Body),
            TextRun::new(learn_more, RunStyle::BodyUnderline),
        ]
    }

    /// Payload attached to every analytics event for this offer
    pub fn event_props(&self) -> EventProps {
        EventProps {
            currency: self.currency,
            installments_count: INSTALLMENTS_COUNT,
        }
    }
}

/// Format an amount for the URL query: no trailing `.0` on whole values
fn query_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Modal visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalState {
    Closed,
    Open,
}

/// Drives the card's interactions and analytics
///
/// The UI component holds one of these in a signal and forwards lifecycle
/// and tap events into it. Each transition emits its event exactly once.
pub struct SnippetController {
    offer: SnippetOffer,
    analytics: AnalyticsHandle,
    state: ModalState,
    reported_render: bool,
}

impl SnippetController {
    pub fn new(offer: SnippetOffer, analytics: AnalyticsHandle) -> Self {
        Self {
            offer,
            analytics,
            state: ModalState::Closed,
            reported_render: false,
        }
    }

    pub fn offer(&self) -> &SnippetOffer {
        &self.offer
    }

    pub fn is_modal_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Card appeared on screen. Reports `SnippetCard.rendered` once.
    pub fn mounted(&mut self) {
        if !self.reported_render {
            self.reported_render = true;
            self.analytics
                .send(AnalyticsEvent::SnippetCardRendered(self.offer.event_props()));
        }
    }

    /// Card tapped: emit the click, then open the modal
    pub fn tap(&mut self) {
        if self.state == ModalState::Closed {
            self.analytics
                .send(AnalyticsEvent::LearnMoreClicked(self.offer.event_props()));
            self.state = ModalState::Open;
        }
    }

    /// The embedded web view became visible
    pub fn modal_appeared(&mut self) {
        if self.state == ModalState::Open {
            self.analytics
                .send(AnalyticsEvent::LearnMorePopUpOpened(self.offer.event_props()));
        }
    }

    /// Modal dismissed by any means
    pub fn modal_dismissed(&mut self) {
        if self.state == ModalState::Open {
            self.analytics
                .send(AnalyticsEvent::LearnMorePopUpClosed(self.offer.event_props()));
            self.state = ModalState::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use std::sync::Arc;
    use url::Url;

    fn offer(amount: f64, currency: Currency) -> SnippetOffer {
        SnippetOffer::new(amount, currency)
    }

    #[test]
    fn test_page_url_ltr_with_price() {
        // amount=1990, currency=QAR, no privacy, LTR
        let url = offer(1990.0, Currency::QAR).page_url(LayoutDirection::Ltr);
        assert_eq!(
            url,
            format!("{}?price=1990&currency=QAR&source=sdk", base_url::EN)
        );
    }

    #[test]
    fn test_page_url_privacy_omits_price() {
        let mut o = offer(1990.0, Currency::AED);
        o.is_privacy_enabled = true;
        let url = o.page_url(LayoutDirection::Ltr);
        assert_eq!(
            url,
            format!("{}?currency=AED&source=sdk&installmentsCount=0", base_url::EN)
        );
        assert!(!url.contains("price="));
    }

    #[test]
    fn test_page_url_rtl_uses_arabic_endpoint() {
        let mut o = offer(1990.0, Currency::SAR);
        o.is_privacy_enabled = true;
        let url = o.page_url(LayoutDirection::Rtl);
        assert!(url.starts_with(base_url::AR));
    }

    #[test]
    fn test_page_url_query_pairs_parse() {
        let url = Url::parse(&offer(499.5, Currency::KWD).page_url(LayoutDirection::Ltr)).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("price".to_string(), "499.5".to_string()),
                ("currency".to_string(), "KWD".to_string()),
                ("source".to_string(), "sdk".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_lang_follows_direction() {
        let o = offer(100.0, Currency::AED);
        assert_eq!(o.page_lang(LayoutDirection::Ltr), Lang::En);
        assert_eq!(o.page_lang(LayoutDirection::Rtl), Lang::Ar);
    }

    #[test]
    fn test_text_runs_ltr() {
        // 1990 / 4 = 497.50
        let runs = offer(1990.0, Currency::QAR).text_runs(LayoutDirection::Ltr);
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[0].text, "or 4 interest-free payments of ");
        assert_eq!(runs[0].style, RunStyle::Body);
        assert_eq!(runs[1].text, "497.50 QAR");
        assert_eq!(runs[1].style, RunStyle::BodyBold);
        assert_eq!(runs[2].text, ". ");
        assert_eq!(runs[3].text, "Learn more");
        assert_eq!(runs[3].style, RunStyle::BodyUnderline);
    }

    #[test]
    fn test_text_runs_privacy_omits_amount() {
        let mut o = offer(1990.0, Currency::AED);
        o.is_privacy_enabled = true;
        let runs = o.text_runs(LayoutDirection::Ltr);
        assert!(!runs[1].text.contains("497.50"));
        assert!(runs[1].text.contains("AED"));
    }

    #[test]
    fn test_text_runs_rtl_arabic_currency() {
        let mut o = offer(1990.0, Currency::SAR);
        o.is_privacy_enabled = true;
        o.prefer_currency_in_arabic = true;
        let runs = o.text_runs(LayoutDirection::Rtl);
        assert_eq!(runs[0].text, "أو قسّمها على 4 دفعات شهرية بقيمة ");
        assert!(runs[1].text.contains("ر.س"));
        assert_eq!(runs[3].text, "لمعرفة المزيد");
    }

    #[test]
    fn test_arabic_currency_requires_rtl() {
        let mut o = offer(1990.0, Currency::SAR);
        o.prefer_currency_in_arabic = true;
        assert_eq!(o.currency_label(LayoutDirection::Ltr), "SAR");
        assert_eq!(o.currency_label(LayoutDirection::Rtl), "ر.س");
    }

    #[test]
    fn test_installment_amount() {
        assert_eq!(offer(1990.0, Currency::QAR).installment_amount(), 497.5);
    }

    fn controller(o: SnippetOffer) -> (Arc<RecordingSink>, SnippetController) {
        let sink = Arc::new(RecordingSink::new());
        let ctrl = SnippetController::new(o, RecordingSink::handle(&sink));
        (sink, ctrl)
    }

    #[test]
    fn test_mount_reports_rendered_once() {
        let (sink, mut ctrl) = controller(offer(100.0, Currency::AED));
        ctrl.mounted();
        ctrl.mounted();
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "SnippetCard.rendered");
        assert_eq!(events[0].props().installments_count, 4);
    }

    #[test]
    fn test_tap_emits_click_then_opens() {
        let (sink, mut ctrl) = controller(offer(100.0, Currency::AED));
        assert!(!ctrl.is_modal_open());
        ctrl.tap();
        assert!(ctrl.is_modal_open());
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "LearnMore.clicked");

        // Taps while the modal is open do nothing
        ctrl.tap();
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_full_interaction_sequence() {
        let (sink, mut ctrl) = controller(offer(100.0, Currency::QAR));
        ctrl.mounted();
        ctrl.tap();
        ctrl.modal_appeared();
        ctrl.modal_dismissed();
        assert!(!ctrl.is_modal_open());

        let names: Vec<&str> = sink.events().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "SnippetCard.rendered",
                "LearnMore.clicked",
                "LearnMore.popUpOpened",
                "LearnMore.popUpClosed",
            ]
        );
    }

    #[test]
    fn test_dismiss_when_closed_is_noop() {
        let (sink, mut ctrl) = controller(offer(100.0, Currency::AED));
        ctrl.modal_dismissed();
        ctrl.modal_appeared();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_query_amount_formatting() {
        assert_eq!(query_amount(1990.0), "1990");
        assert_eq!(query_amount(499.5), "499.5");
    }
}
