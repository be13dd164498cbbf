mod connect;

pub(crate) use connect::render_connecting;
