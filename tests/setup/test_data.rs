// Program paths
pub const AGENT_REPUTATION_SO_PATH: &str = "target/deploy/agent_reputation.so";

// Config test data
pub const DEFAULT_MIN_STAKE: u64 = 10;
pub const DEFAULT_DECAY_RATE: u64 = 1;
pub const DEFAULT_REWARD_AMOUNT: u64 = 100;

// Agent test data
pub const ALICE_NAME: &str = "alice";
pub const ALICE_METADATA_URI: &str = "ipfs://QmAliceMetadata";
pub const BOB_NAME: &str = "bob";
pub const BOB_METADATA_URI: &str = "ipfs://QmBobMetadata";
pub const CAROL_NAME: &str = "carol";
pub const CAROL_METADATA_URI: &str = "ipfs://QmCarolMetadata";

// Task test data
pub const DEFAULT_TASK_ID: &str = "t1";
pub const DEFAULT_PROOF_URI: &str = "ipfs://QmTaskProof";

// Vouch test data
pub const DEFAULT_VOUCH_AMOUNT: u64 = 100;

// LiteSVM default: 5000 lamports per signature
pub const TX_FEE: u64 = 5_000;
