use crate::model::client::ClientDto;

/// Shared client-list and active-selection state.
///
/// Provided once at the app root as a context signal; components subscribe by
/// reading it and re-render whenever the selection or client list changes.
#[derive(Clone, Default)]
pub struct ActiveClientState {
    pub clients: Vec<ClientDto>,
    pub selected_id: Option<i32>,
    pub fetched: bool,
}

impl ActiveClientState {
    pub fn selected(&self) -> Option<&ClientDto> {
        self.selected_id
            .and_then(|id| self.clients.iter().find(|client| client.id == id))
    }

    /// Selects a client; unknown IDs are ignored.
    pub fn select(&mut self, client_id: i32) {
        if self.clients.iter().any(|client| client.id == client_id) {
            self.selected_id = Some(client_id);
        }
    }

    /// Replaces the client list, keeping the current selection when it still
    /// exists and otherwise falling back to the first client.
    pub fn set_clients(&mut self, clients: Vec<ClientDto>) {
        if let Some(selected_id) = self.selected_id {
            if !clients.iter().any(|client| client.id == selected_id) {
                self.selected_id = None;
            }
        }

        if self.selected_id.is_none() {
            self.selected_id = clients.first().map(|client| client.id);
        }

        self.clients = clients;
        self.fetched = true;
    }

    /// Adds a freshly created client and makes it the active one.
    pub fn add_client(&mut self, client: ClientDto) {
        self.selected_id = Some(client.id);
        self.clients.push(client);
    }
}
