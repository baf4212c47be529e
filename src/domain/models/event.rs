use super::Message;
use super::SessionStatus;

#[derive(Clone, Debug)]
pub enum Event {
    SessionChanged(SessionStatus),
    ActiveConversationChanged(Option<String>),
    MessageAppended(Message),
    SummariesReloaded(usize),
}
