use solana_program::{account_info::AccountInfo, clock::Epoch, pubkey::Pubkey};

/// Backing storage for a hand-built `AccountInfo`.
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub writable: bool,
}

impl TestAccount {
    pub fn new(lamports: u64) -> Self {
        Self {
            key: Pubkey::new_unique(),
            owner: crate::ID,
            lamports,
            data: Vec::new(),
            writable: true,
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            self.writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            Epoch::default(),
        )
    }
}
