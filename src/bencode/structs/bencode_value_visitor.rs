pub struct BencodeValueVisitor;
