pub struct PeerIdVisitor;
