//! Job search core: pure state machine, result view and view-model helpers.
mod copy_ack;
mod detail;
mod effect;
mod i18n;
mod model;
mod msg;
mod result_view;
mod state;
mod update;
mod view_model;

pub use copy_ack::{CopyAck, COPY_ACK_DURATION};
pub use detail::DetailDisclosure;
pub use effect::Effect;
pub use i18n::{Locale, TextKey, Translations};
pub use model::{ApplicationTarget, Contact, JobId, JobRecord, SearchHits};
pub use msg::Msg;
pub use result_view::{
    publication_timestamp, ResultSet, Sort, SortDirection, SortKey, DEFAULT_SORT, PAGE_SIZE,
};
pub use state::{AppState, RequestId, SearchPhase};
pub use update::update;
pub use view_model::{
    date_portion, summarize_contacts, AppViewModel, ApplicationCell, ContactEmailView, DetailView,
    JobRowView, PaginationView,
};
