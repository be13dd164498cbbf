pub(super) mod phase_view;
pub(super) mod connecting;
pub(super) mod ready;

pub(crate) use phase_view::PhaseView;
