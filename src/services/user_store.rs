use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{User, UserPayload};

/// Store em memória de usuários mock.
///
/// Instanciado uma vez no `main` e compartilhado com os handlers via `web::Data`.
/// Os ids vêm de um contador atômico incrementado sob o write lock e nunca são
/// reutilizados, então a ordem do `BTreeMap` é também a ordem de inserção.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // Nenhuma operação deixa o mapa inconsistente no meio, então um lock
    // envenenado pode ser reaproveitado.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u64, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Todos os usuários, em ordem crescente de id
    pub fn list(&self) -> Vec<User> {
        self.read().values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.read().get(&id).cloned()
    }

    /// Atribui o próximo id e armazena o usuário
    pub fn create(&self, payload: UserPayload) -> User {
        let mut users = self.write();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::from_payload(id, payload);
        users.insert(id, user.clone());
        user
    }

    /// Substitui todos os campos (exceto o id). Não insere se o id não existir.
    pub fn update(&self, id: u64, payload: UserPayload) -> Option<User> {
        let mut users = self.write();
        let existing = users.get_mut(&id)?;
        *existing = User::from_payload(id, payload);
        Some(existing.clone())
    }

    pub fn delete(&self, id: u64) -> bool {
        self.write().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
